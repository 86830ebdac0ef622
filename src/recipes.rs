//! Ready-made pipelines built from the core.
//!
//! Each one is a chain of `map`/`chain` steps closed by a single `fold`.
//! Effects (file reads) come in through [`FileSource`]; everything else is pure.

use serde::Deserialize;

use crate::boxed::Boxed;
use crate::combinators::{if_truthy, iif, maybe, try_result};
use crate::either::Either;
use crate::failure::{Caught, Failure};
use crate::files::FileSource;

/// Replacement for URLs that look hostile.
pub const SAFE_SITE: &str = "http://safesite";

/// Shape of the JSON config consulted by [`config_port`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default)]
    pub url: Option<String>,
}

/// The only field [`db_url`] and [`safe_db_url`] read; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<Street>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Street {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub remember_me: bool,
}

/// Invalid code points become U+FFFD rather than being truncated to 16 bits.
fn char_from_code(code: u32) -> String {
    char::from_u32(code)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

/// Upper-cased character for a code point, or `"X"` for a failure.
pub fn shout_char_code<L>(pipeline: Either<L, u32>) -> String {
    pipeline
        .map(char_from_code)
        .map(|s| s.to_uppercase())
        .fold(|_| "X".to_string(), |s| s)
}

/// Upper-cased string for a run of code points.
pub fn shout_char_codes(pipeline: Boxed<Vec<u32>>) -> String {
    pipeline
        .map(|codes| codes.into_iter().map(char_from_code).collect::<String>())
        .map(|s| s.to_uppercase())
        .fold(|s| s)
}

/// Port from a JSON config file, or `fallback` when it cannot be read or decoded.
///
/// A port outside `u16` counts as a decode failure and also yields `fallback`.
pub fn config_port<S: FileSource>(files: &S, name: &str, fallback: u16) -> u16 {
    try_result(|| files.read_to_string(name))
        .chain(|raw| try_result(|| serde_json::from_str::<ServerConfig>(&raw)))
        .fold(|_| fallback, |cfg| cfg.port)
}

pub fn greeting(current_user: Option<&str>) -> String {
    maybe(current_user).fold(
        |_| "<div>Login</div>".to_string(),
        |user| format!("<div>Hello {user}</div>"),
    )
}

/// A premium user's preferences; defaults for everyone else.
pub fn preferences(user: &User) -> Preferences {
    let gate: Either<(), &User> = if user.premium {
        Either::success(user)
    } else {
        Either::failure(())
    };
    gate.fold(|_| Preferences::default(), |u| u.preferences)
}

/// Same as [`preferences`], with the defaults travelling in the failure case.
pub fn preferences_if_premium(user: &User) -> Preferences {
    if_truthy(&user.premium, user, Preferences { remember_me: false })
        .fold(|defaults| defaults, |u| u.preferences)
}

pub fn street_name(user: &User) -> String {
    maybe(user.address.as_ref())
        .chain(|a| maybe(a.street.as_ref()))
        .map(|s| s.name.clone())
        .fold(|_| "no street".to_string(), |name| name)
}

/// The optional `url` of a JSON config; `None` if decoding fails or it is unset.
pub fn db_url(cfg: &str) -> Option<String> {
    try_result(|| serde_json::from_str::<DbConfig>(cfg))
        .widen::<Failure>()
        .chain_into(|c| maybe(c.url))
        .fold(|_| None, Some)
}

/// Like [`db_url`], but hostile URLs are swapped for [`SAFE_SITE`] and a
/// missing URL becomes `""`. A decode error is handed back to the caller.
pub fn safe_db_url(cfg: &str) -> Result<String, Caught> {
    try_result(|| serde_json::from_str::<DbConfig>(cfg))
        .widen::<Failure>()
        .chain_into(|c| maybe(c.url))
        .map(|url| {
            iif(|| !url.contains("hacker"), url.clone(), SAFE_SITE.to_string())
                .fold(|safe| safe, |url| url)
        })
        .fold(
            |failure| match failure {
                Failure::Caught(e) => Err(e),
                _ => Ok(String::new()),
            },
            Ok,
        )
}
