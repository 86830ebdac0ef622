//! Constructors that lift non-`Either` failure sources into an [`Either`].
//!
//! - [`iif`] / [`if_truthy`]: a boolean test.
//! - [`maybe`]: an optional value.
//! - [`try_catch`] / [`try_result`]: a panic or a returned error. These are the
//!   only places a panic is stopped and turned into a value.

use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::either::{Either, Left, Right};
use crate::failure::{Absent, Caught};
use crate::truthy::Truthy;

/// Success(`value`) if `predicate` holds, else failure(`failure`).
///
/// The predicate is evaluated here, exactly once.
pub fn iif<V, F, P>(predicate: P, value: V, failure: F) -> Either<F, V>
where
    P: FnOnce() -> bool,
{
    if predicate() { Right(value) } else { Left(failure) }
}

/// [`iif`] over the [`Truthy`] reading of `test`.
pub fn if_truthy<T, V, F>(test: &T, value: V, failure: F) -> Either<F, V>
where
    T: Truthy + ?Sized,
{
    iif(|| test.is_truthy(), value, failure)
}

/// Success for a present value, failure carrying [`Absent`] otherwise.
pub fn maybe<T>(value: Option<T>) -> Either<Absent, T> {
    match value {
        Some(v) => Right(v),
        None => Left(Absent),
    }
}

/// Run `thunk` once; a panic becomes `Left(Caught::Panic)`.
///
/// The process panic hook still runs before the unwind is caught, so the
/// default hook prints the panic to stderr. Install a quiet hook with
/// [`std::panic::set_hook`] if that output is unwanted.
pub fn try_catch<T, F>(thunk: F) -> Either<Caught, T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(value) => Right(value),
        Err(payload) => {
            let caught = Caught::from_panic(payload);
            debug!(error = %caught, "thunk panicked");
            Left(caught)
        }
    }
}

/// Run a fallible `thunk` once; both an `Err` and a panic become `Left`.
pub fn try_result<T, E, F>(thunk: F) -> Either<Caught, T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    try_catch(thunk).chain(|result| match result {
        Ok(value) => Right(value),
        Err(e) => {
            let caught = Caught::raised(e);
            debug!(error = %caught, "thunk returned an error");
            Left(caught)
        }
    })
}
