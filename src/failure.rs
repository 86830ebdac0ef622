//! Failure payloads produced by the combinators.
//!
//! Each combinator has its own narrow failure type so a single-source pipeline
//! stays precise. [`Failure`] is the closed sum a pipeline widens into when it
//! crosses sources (see [`Either::widen`](crate::Either::widen) and
//! [`Either::chain_into`](crate::Either::chain_into)).

use std::any::Any;
use std::error::Error as StdError;

use thiserror::Error;

/// Marker carried by [`maybe`](crate::maybe) when the value is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("value is absent")]
pub struct Absent;

/// An error captured by [`try_catch`](crate::try_catch) or [`try_result`](crate::try_result).
#[derive(Debug, Error)]
pub enum Caught {
    /// The thunk panicked; holds the panic message.
    #[error("panicked: {0}")]
    Panic(String),

    /// The thunk returned an error.
    #[error("{0}")]
    Raised(Box<dyn StdError + Send + Sync>),
}

impl Caught {
    /// Convert a `catch_unwind` payload into a message-carrying `Caught`.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(s) => (*s).to_string(),
                Err(_) => "unknown panic payload".to_string(),
            },
        };
        Caught::Panic(message)
    }

    pub fn raised<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Caught::Raised(error.into())
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Caught::Panic(_))
    }
}

/// Every failure source a pipeline can meet.
#[derive(Debug, Error)]
pub enum Failure {
    /// A predicate given to `iif`/`if_truthy` did not hold.
    #[error("predicate rejected: {0}")]
    PredicateFalse(String),

    #[error(transparent)]
    Absent(#[from] Absent),

    #[error(transparent)]
    Caught(#[from] Caught),

    /// Constructed directly by the caller.
    #[error("{0}")]
    Explicit(String),
}

impl Failure {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Failure::PredicateFalse(reason.into())
    }

    pub fn explicit(message: impl Into<String>) -> Self {
        Failure::Explicit(message.into())
    }
}
