// File: crates/chart-data/tests/common/mod.rs
// Purpose: Shared fixtures for building results from compact tuples.

#![allow(dead_code)]

use chart_data::{BenchmarkResult, Site};
use serde_json::{json, Value};

pub fn site(id: &str) -> Site {
    Site::new(id, format!("Site {id}"))
}

pub fn result(site_id: &str, json: Value) -> BenchmarkResult {
    BenchmarkResult::new(site(site_id), json)
}

/// Result with `{"x": x, "y": y}` payload.
pub fn xy(site_id: &str, x: Value, y: Value) -> BenchmarkResult {
    result(site_id, json!({ "x": x, "y": y }))
}
