// File: crates/chart-core/tests/grid.rs
// Purpose: Tick placement, tick formatting and pixel transforms.

use chart_core::grid::{format_tick, linear_ticks, log_ticks};
use chart_core::scale::{CategoryScale, ValueScale};

#[test]
fn linear_ticks_use_round_steps() {
    assert_eq!(linear_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(linear_ticks(0.0, 1.0, 4), vec![0.0, 0.5, 1.0]);
    assert_eq!(linear_ticks(-3.0, 3.0, 6), vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn log_ticks_are_decades() {
    assert_eq!(log_ticks(1.0, 1000.0), vec![1.0, 10.0, 100.0, 1000.0]);
    assert_eq!(log_ticks(2.0, 5.0), vec![2.0, 5.0]);
}

#[test]
fn tick_formatting() {
    assert_eq!(format_tick(0.0), "0");
    assert_eq!(format_tick(2.5), "2.5");
    assert_eq!(format_tick(100.0), "100");
    assert_eq!(format_tick(1e6), "1e6");
}

#[test]
fn category_scale_spreads_edge_to_edge() {
    let s = CategoryScale::new(100.0, 300.0, 3);
    assert_eq!(s.to_px(0.0), 100.0);
    assert_eq!(s.to_px(1.0), 200.0);
    assert_eq!(s.to_px(2.0), 300.0);
    assert_eq!(CategoryScale::new(100.0, 300.0, 1).to_px(0.0), 200.0);
    assert_eq!(s.label_stride(50.0), 1);
    assert_eq!(CategoryScale::new(0.0, 100.0, 101).label_stride(10.0), 10);
}

#[test]
fn value_scale_linear_and_log() {
    let lin = ValueScale::new_linear(0.0, 100.0, 0.0, 10.0);
    assert_eq!(lin.to_px(0.0), 100.0);
    assert_eq!(lin.to_px(10.0), 0.0);
    assert!((lin.from_px(50.0) - 5.0).abs() < 1e-6);

    let log = ValueScale::new_log10(0.0, 100.0, 1.0, 100.0);
    assert!((log.to_px(10.0) - 50.0).abs() < 1e-4);
    assert!((log.from_px(50.0) - 10.0).abs() < 1e-4);
}
