// File: crates/chart-data/tests/controls.rs
// Purpose: Widget state affordances and end-to-end rendering of the chart spec.

mod common;

use chart_data::{Analysis, DottedPath, Error, LineChartControls, Mode, ScaleType};
use common::xy;
use serde_json::json;

#[test]
fn not_ready_until_both_axes_chosen() {
    let mut c = LineChartControls::new();
    let results = vec![xy("a", json!(1), json!(2))];
    assert!(c.render(&results, &DottedPath).is_none());
    c.set_x_path("x");
    assert!(!c.is_ready());
    assert!(c.render(&results, &DottedPath).is_none());
    c.set_y_path("y");
    assert!(c.is_ready());
    assert!(c.render(&results, &DottedPath).is_some());
}

#[test]
fn numeric_modes_require_numeric_x() {
    let numeric = Analysis { same_site: true, columns_are_numbers: true };
    let text = Analysis { same_site: true, columns_are_numbers: false };
    for mode in Mode::ALL {
        assert!(LineChartControls::mode_enabled(mode, &numeric));
        assert_eq!(LineChartControls::mode_enabled(mode, &text), mode == Mode::Simple);
    }

    let mut c = LineChartControls::with_axes("x", "y");
    let err = c.set_mode(Mode::Logarithmic, &text).unwrap_err();
    assert!(matches!(err, Error::ModeUnavailable(Mode::Logarithmic)));
    assert_eq!(c.mode, Mode::Simple);
    c.set_mode(Mode::Logarithmic, &numeric).unwrap();
    assert_eq!(c.mode, Mode::Logarithmic);
}

#[test]
fn grouping_only_enabled_in_numeric_modes() {
    let mut c = LineChartControls::with_axes("x", "y");
    assert!(!c.grouping_enabled());
    c.mode = Mode::Linear;
    assert!(c.grouping_enabled());
    c.mode = Mode::Logarithmic;
    assert!(c.grouping_enabled());
}

#[test]
fn grouped_switch_applies_when_mode_allows() {
    let results = vec![xy("a", json!(1), json!(2)), xy("b", json!(1), json!(3))];
    let mut c = LineChartControls::with_axes("x", "y");
    c.set_grouped(true);
    let simple = c.render(&results, &DottedPath).unwrap();
    assert_eq!(simple.data.datasets.len(), 1);

    let analysis = c.analyze(&results, &DottedPath);
    c.set_mode(Mode::Logarithmic, &analysis).unwrap();
    let spec = c.render(&results, &DottedPath).unwrap();
    assert_eq!(spec.data.datasets.len(), 2);
    assert_eq!(spec.options.y_scale(), ScaleType::Logarithmic);
    assert!(!spec.analysis.same_site);
    assert!(spec.analysis.columns_are_numbers);
}

#[test]
fn mode_parses_case_insensitively() {
    assert_eq!("Linear".parse::<Mode>().unwrap(), Mode::Linear);
    assert_eq!("log".parse::<Mode>().unwrap(), Mode::Logarithmic);
    assert_eq!(" simple ".parse::<Mode>().unwrap(), Mode::Simple);
    assert!(matches!("bars".parse::<Mode>(), Err(Error::UnknownMode(_))));
}
