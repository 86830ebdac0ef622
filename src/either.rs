//! The two-case outcome container.
//!
//! An [`Either`] holds exactly one of a failure payload (`Left`) or a success
//! payload (`Right`). It is consumed only by value: [`Either::map`] and
//! [`Either::chain`] return a fresh container, [`Either::fold`] collapses it to a
//! plain value. Once a pipeline is in the `Left` case every further `map` and
//! `chain` passes the payload through untouched.
//!
//! ```
//! use eitherway::Either;
//!
//! let shout = |e: Either<&str, u32>| {
//!     e.map(|n| char::from_u32(n).unwrap_or('?'))
//!         .map(|c| c.to_ascii_uppercase())
//!         .fold(|_| 'X', |c| c)
//! };
//!
//! assert_eq!(shout(Either::success(113)), 'Q');
//! assert_eq!(shout(Either::failure("nope")), 'X');
//! ```

/// A computation outcome: failure (`Left`) or success (`Right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an Either must be consumed with `fold` to extract a result"]
pub enum Either<L, R> {
    /// Failure case.
    Left(L),
    /// Success case.
    Right(R),
}

pub use Either::{Left, Right};

impl<L, R> Either<L, R> {
    /// Wrap `value` in the success case.
    pub fn success(value: R) -> Self {
        Right(value)
    }

    /// Wrap `value` in the failure case.
    pub fn failure(value: L) -> Self {
        Left(value)
    }

    /// Apply `f` to a success payload. A failure is re-tagged and `f` is never called.
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(f(r)),
        }
    }

    /// Bind a fallible step. On success the container returned by `f` is the
    /// result; on failure `f` is never called.
    pub fn chain<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => f(r),
        }
    }

    /// Bind a fallible step whose failure type converts into this pipeline's.
    ///
    /// Used to grow a pipeline across failure sources, e.g. a `Caught` from
    /// [`try_result`](crate::try_result) followed by an `Absent` from
    /// [`maybe`](crate::maybe), both landing in [`Failure`](crate::Failure).
    pub fn chain_into<L2, R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L2, R2>,
        L2: Into<L>,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => f(r).map_left(Into::into),
        }
    }

    /// Collapse the container, applying exactly one of the two handlers.
    pub fn fold<X, FL, FR>(self, on_failure: FL, on_success: FR) -> X
    where
        FL: FnOnce(L) -> X,
        FR: FnOnce(R) -> X,
    {
        match self {
            Left(l) => on_failure(l),
            Right(r) => on_success(r),
        }
    }

    /// Apply `f` to a failure payload, leaving a success untouched.
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Left(l) => Left(f(l)),
            Right(r) => Right(r),
        }
    }

    /// Re-tag the failure type with a wider one.
    pub fn widen<L2>(self) -> Either<L2, R>
    where
        L2: From<L>,
    {
        self.map_left(L2::from)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// The failure payload, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Left(l) => Some(l),
            Right(_) => None,
        }
    }

    /// The success payload, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Left(_) => None,
            Right(r) => Some(r),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Right(r),
            Err(l) => Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}
