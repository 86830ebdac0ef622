//! End-to-end pipelines over real files and the combinators.

use std::fs;

use eitherway::recipes::{self, ServerConfig};
use eitherway::{
    Caught, DiskFiles, Either, Failure, Left, Right, StubFiles, iif, maybe, try_catch, try_result,
};
use tempfile::TempDir;

fn run<L>(e: Either<L, u32>) -> String {
    e.map(|n| char::from_u32(n).map(String::from).unwrap_or_default())
        .map(|s| s.to_uppercase())
        .fold(|_| "X".to_string(), |s| s)
}

#[test]
fn scenario_a() {
    assert_eq!(run(Either::<u32, u32>::success(113)), "Q");
    assert_eq!(run(Either::<u32, u32>::failure(113)), "X");
}

#[test]
fn scenario_a_through_try_catch() {
    assert_eq!(run(try_catch(|| 115)), "S");
    assert_eq!(run(try_catch(|| -> u32 { panic!("BANG") })), "X");
}

#[test]
fn try_catch_holds_the_error() {
    match try_catch(|| -> i32 { panic!("BANG") }) {
        Left(caught) => assert_eq!(caught.to_string(), "panicked: BANG"),
        Right(v) => panic!("expected failure, got {v}"),
    }
    assert_eq!(try_catch(|| 115).right(), Some(115));
}

#[test]
fn scenario_b_on_disk() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"port": 8888}"#).unwrap();
    let files = DiskFiles::new(dir.path());

    assert_eq!(recipes::config_port(&files, "config.json", 3000), 8888);
    assert_eq!(recipes::config_port(&files, "absent.json", 3000), 3000);
}

#[test]
fn scenario_b_with_stub() {
    let files = StubFiles::new().with_file("config.json", r#"{"port": 8888}"#);
    assert_eq!(recipes::config_port(&files, "config.json", 3000), 8888);
    assert_eq!(recipes::config_port(&StubFiles::new(), "config.json", 3000), 3000);
}

#[test]
fn failure_widens_across_sources() {
    let decode = |raw: &str| {
        try_result(|| serde_json::from_str::<ServerConfig>(raw))
            .widen::<Failure>()
            .chain_into(|c| maybe(c.url))
            .chain(|url| {
                iif(|| url.starts_with("postgres://"), url.clone(), Failure::rejected(url.clone()))
            })
    };

    assert!(matches!(decode("{"), Left(Failure::Caught(Caught::Raised(_)))));
    assert!(matches!(decode(r#"{"port": 1}"#), Left(Failure::Absent(_))));
    assert!(matches!(
        decode(r#"{"port": 1, "url": "mysql://x"}"#),
        Left(Failure::PredicateFalse(ref u)) if u == "mysql://x"
    ));
    assert_eq!(
        decode(r#"{"port": 1, "url": "postgres://x"}"#).right().as_deref(),
        Some("postgres://x")
    );
}

#[test]
fn explicit_failure_short_circuits() {
    let out = Either::<Failure, i32>::failure(Failure::explicit("stop"))
        .map(|x| x + 1)
        .fold(|f| f.to_string(), |x| x.to_string());
    assert_eq!(out, "stop");
}

#[test]
fn maybe_scenario() {
    assert_eq!(maybe(None::<i32>), Left(eitherway::Absent));
    assert_eq!(maybe(Some(5)), Right(5));
}
