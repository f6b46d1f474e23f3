// File: crates/chart-data/src/analysis.rs
// Summary: Single pass over the results computing the flags that gate modes and labelling.

use crate::field::{FieldAccessor, Scalar};
use crate::result::BenchmarkResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    /// All results come from the same site. False for no results.
    pub same_site: bool,
    /// Every result has a numeric value at the x path. False for no results.
    pub columns_are_numbers: bool,
}

pub fn analyze_data<A: FieldAccessor + ?Sized>(
    results: &[BenchmarkResult],
    x_path: &str,
    accessor: &A,
) -> Analysis {
    let Some(first) = results.first() else {
        return Analysis::default();
    };
    let mut analysis = Analysis { same_site: true, columns_are_numbers: true };
    for result in results {
        analysis.same_site &= result.site.id == first.site.id;
        analysis.columns_are_numbers &=
            matches!(accessor.fetch_subkey(&result.json, x_path), Some(Scalar::Number(_)));
    }
    analysis
}
