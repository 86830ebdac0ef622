//! eitherway — value-based error handling.
//!
//! A computation's outcome is an [`Either`]: `Left` for failure, `Right` for
//! success. Pipelines thread it through [`Either::map`] and [`Either::chain`]
//! and finish with exactly one [`Either::fold`]. Failure short-circuits every
//! step in between.
//!
//! The combinators turn other failure sources into an `Either`:
//!
//! - [`iif`] / [`if_truthy`] — a boolean test ([`Truthy`] defines the latter).
//! - [`maybe`] — an `Option`.
//! - [`try_catch`] / [`try_result`] — a panic or a returned error.
//!
//! [`Boxed`] is the success-only functor, kept for contrast.
//!
//! The binary entry point is src/main.rs; `config`, `logger` and `error` back it.

pub mod boxed;
pub mod combinators;
pub mod config;
pub mod either;
pub mod error;
pub mod failure;
pub mod files;
pub mod logger;
pub mod recipes;
pub mod truthy;

pub use boxed::Boxed;
pub use combinators::{if_truthy, iif, maybe, try_catch, try_result};
pub use either::{Either, Left, Right};
pub use failure::{Absent, Caught, Failure};
pub use files::{DiskFiles, FileSource, StubFiles};
pub use truthy::Truthy;
