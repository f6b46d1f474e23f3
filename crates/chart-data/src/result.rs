// File: crates/chart-data/src/result.rs
// Summary: Benchmark result model (site, semi-structured json payload) and JSON loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Originating location of a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Site {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), description: None, address: None }
    }
}

/// The benchmark (container image) a result was produced with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub docker_image: String,
    pub docker_tag: String,
}

impl Benchmark {
    pub fn display_name(&self) -> String {
        format!("{}:{}", self.docker_image, self.docker_tag)
    }
}

/// One benchmark measurement. Never mutated by chart derivation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub site: Site,
    pub json: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<Benchmark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_datetime: Option<DateTime<Utc>>,
}

impl BenchmarkResult {
    pub fn new(site: Site, json: Value) -> Self {
        Self { id: None, site, json, benchmark: None, upload_datetime: None }
    }
}

// Either a bare array or a paginated search response.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsDocument {
    List(Vec<BenchmarkResult>),
    Page { items: Vec<BenchmarkResult> },
}

/// Read results from JSON: a plain array, or an object with an `items` array.
pub fn load_results(reader: impl std::io::Read) -> Result<Vec<BenchmarkResult>> {
    let doc: ResultsDocument = serde_json::from_reader(reader)?;
    Ok(match doc {
        ResultsDocument::List(items) | ResultsDocument::Page { items } => items,
    })
}
