// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

#![allow(dead_code)]

use serde::Serialize;
use serde_json::{Number, Value};

/// Turns every number into a float, the way a dynamically typed JSON decoder would see it.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Number(n) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Number(n)),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Asserts that `decoded` re-encodes to the same JSON document as `body`.
pub fn assert_round_trip<T: Serialize>(body: &str, decoded: &T) {
    let expected: Value = serde_json::from_str(body).expect("Served body is not JSON");
    let actual = serde_json::to_value(decoded).expect("Failed to re-encode response");

    assert!(!expected.is_null());
    assert_eq!(normalize(expected), normalize(actual));
}
