#![allow(dead_code)]

use crate::common::headers::{header_value, vary_values};
use cors_gate::constants::header;
use cors_gate::{CorsDecision, Headers};
use std::collections::HashSet;

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_actual(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Actual(result) => result.headers,
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    match header_value(headers, name) {
        Some(value) => assert_eq!(value, expected, "unexpected value for {name}"),
        None => panic!("expected header {name} to be present"),
    }
}

pub fn assert_no_header(headers: &Headers, name: &str) {
    assert!(
        header_value(headers, name).is_none(),
        "expected header {name} to be absent, got {:?}",
        header_value(headers, name)
    );
}

pub fn assert_vary_eq<'a, I>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let expected: HashSet<String> = expected.into_iter().map(str::to_owned).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_contains(headers: &Headers, entry: &str) {
    assert!(
        vary_values(headers).contains(entry),
        "expected Vary to contain {entry}, got {:?}",
        header_value(headers, header::VARY)
    );
}
