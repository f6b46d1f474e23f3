// File: crates/chart-data/src/field.rs
// Summary: Field-path lookup into a result's json payload, plus the resolved scalar type.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::result::BenchmarkResult;

/// A resolved field value. Anything else (null, objects, arrays, missing keys)
/// counts as undefined and is represented by `None` at the call sites.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Bool(b) => Some(Scalar::Text(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write_number(f, *n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

// Same text as a JavaScript number: exponent form below 1e-6 and from 1e21 up.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let abs = n.abs();
    if n == 0.0 {
        f.write_str("0")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if abs < 1e-6 || abs >= 1e21 {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{n}")
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self { Scalar::Number(n) }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self { Scalar::Text(s.to_string()) }
}

/// Resolves field paths inside a result payload and names them for display.
pub trait FieldAccessor {
    /// Value at `path`, or `None` when the path is undefined for this record.
    fn fetch_subkey(&self, record: &Value, path: &str) -> Option<Scalar>;

    /// Human-readable name for a path.
    fn subkey_name(&self, path: &str) -> String;
}

/// `a.b.0.c` style paths: object keys match literally, numeric segments index arrays.
#[derive(Clone, Copy, Debug, Default)]
pub struct DottedPath;

impl DottedPath {
    pub fn lookup<'v>(record: &'v Value, path: &str) -> Option<&'v Value> {
        if path.is_empty() {
            return None;
        }
        path.split('.').try_fold(record, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl FieldAccessor for DottedPath {
    fn fetch_subkey(&self, record: &Value, path: &str) -> Option<Scalar> {
        Self::lookup(record, path).and_then(Scalar::from_json)
    }

    fn subkey_name(&self, path: &str) -> String {
        path.rsplit('.').next().unwrap_or(path).to_string()
    }
}

/// Sorted, distinct paths of every scalar leaf across all results.
pub fn collect_field_paths(results: &[BenchmarkResult]) -> Vec<String> {
    let mut paths = BTreeSet::new();
    for result in results {
        collect_leaves(&result.json, "", &mut paths);
    }
    paths.into_iter().collect()
}

fn collect_leaves(node: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    let join = |segment: &str| {
        if prefix.is_empty() { segment.to_string() } else { format!("{prefix}.{segment}") }
    };
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaves(child, &join(key), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_leaves(child, &join(&i.to_string()), out);
            }
        }
        Value::Null => {}
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string());
            }
        }
    }
}
