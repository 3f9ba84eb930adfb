//! Common test utilities and fixtures
#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Install a test-scoped tracing subscriber so kernel trace events are
/// exercised and printed through the test harness.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// The sequence used throughout the examples: `[1, 2, 3, 4, 5]`
pub fn numbers() -> Vec<i64> {
    vec![1, 2, 3, 4, 5]
}

/// `{a: 1, b: 2, c: 3}` as a JSON object (insertion ordered)
pub fn letters_json() -> Value {
    json!({"a": 1, "b": 2, "c": 3})
}

/// `{a: 1, b: 2, c: 3}` as a sorted map
pub fn letters_map() -> BTreeMap<String, i64> {
    [("a", 1), ("b", 2), ("c", 3)]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
