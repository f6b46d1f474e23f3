// File: crates/chart-data/tests/analysis.rs
// Purpose: Validate the same-site and numeric-column flags.

mod common;

use chart_data::{analyze_data, Analysis, DottedPath};
use common::{result, xy};
use serde_json::json;

#[test]
fn empty_input_sets_both_flags_false() {
    let a = analyze_data(&[], "x", &DottedPath);
    assert_eq!(a, Analysis { same_site: false, columns_are_numbers: false });
}

#[test]
fn single_site_numeric_column() {
    let results = vec![xy("a", json!(1), json!(10)), xy("a", json!(2.5), json!(20))];
    let a = analyze_data(&results, "x", &DottedPath);
    assert!(a.same_site);
    assert!(a.columns_are_numbers);
}

#[test]
fn two_sites_are_detected() {
    let results = vec![xy("a", json!(1), json!(10)), xy("b", json!(1), json!(20))];
    let a = analyze_data(&results, "x", &DottedPath);
    assert!(!a.same_site);
    assert!(a.columns_are_numbers);
}

#[test]
fn one_text_or_missing_value_makes_column_non_numeric() {
    let text = vec![xy("a", json!(1), json!(10)), xy("a", json!("2"), json!(20))];
    assert!(!analyze_data(&text, "x", &DottedPath).columns_are_numbers);

    let missing = vec![xy("a", json!(1), json!(10)), result("a", json!({ "y": 3 }))];
    assert!(!analyze_data(&missing, "x", &DottedPath).columns_are_numbers);
}

#[test]
fn empty_path_is_never_numeric() {
    let results = vec![xy("a", json!(1), json!(10))];
    let a = analyze_data(&results, "", &DottedPath);
    assert!(a.same_site);
    assert!(!a.columns_are_numbers);
}
