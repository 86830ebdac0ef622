//! Single-case functor: the success-only subset of [`Either`](crate::Either).

/// A container holding exactly one value, with no failure case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Boxed<T>(T);

impl<T> Boxed<T> {
    pub fn new(value: T) -> Self {
        Boxed(value)
    }

    /// Always applies `f`; there is nothing to short-circuit on.
    pub fn map<T2, F>(self, f: F) -> Boxed<T2>
    where
        F: FnOnce(T) -> T2,
    {
        Boxed(f(self.0))
    }

    pub fn fold<X, F>(self, f: F) -> X
    where
        F: FnOnce(T) -> X,
    {
        f(self.0)
    }
}

impl<T> From<T> for Boxed<T> {
    fn from(value: T) -> Self {
        Boxed(value)
    }
}
