#![allow(dead_code)]

use super::headers::{header_value, vary_values};
use cors_gate::constants::header;
use cors_gate::{CorsDecision, Headers, PreflightRejection, SimpleRejection};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted(result) => result.headers,
        other => panic!("expected simple acceptance, got {:?}", other),
    }
}

pub fn assert_simple_rejected(decision: CorsDecision) -> SimpleRejection {
    match decision {
        CorsDecision::SimpleRejected(rejection) => rejection,
        other => panic!("expected simple rejection, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::PreflightAccepted(result) => (result.headers, result.status),
        other => panic!("expected preflight acceptance, got {:?}", other),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> PreflightRejection {
    match decision {
        CorsDecision::PreflightRejected(rejection) => rejection,
        other => panic!("expected preflight rejection, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected a not-applicable decision, got {:?}",
        decision
    );
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_vary_eq<I, S>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: std::collections::HashSet<String> =
        expected.into_iter().map(Into::into).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_contains(headers: &Headers, entry: &str) {
    assert!(
        vary_values(headers).contains(entry),
        "Vary should contain {entry}"
    );
}

pub fn assert_vary_not_contains(headers: &Headers, entry: &str) {
    assert!(
        !vary_values(headers).contains(entry),
        "Vary should not contain {entry}"
    );
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        header_value(headers, header::VARY).is_none(),
        "Vary should be absent"
    );
}
