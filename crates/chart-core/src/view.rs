// File: crates/chart-core/src/view.rs
// Value-axis extents derived from the drawable points of a chart.

use crate::axis::ScaleKind;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for (_, y) in s.drawable() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        match chart.y_axis.kind {
            ScaleKind::Linear => Self::linear(y_min, y_max, chart.y_axis.begin_at_zero),
            ScaleKind::Log10 => Self::log10(y_min, y_max),
        }
    }

    fn linear(mut y_min: f64, mut y_max: f64, begin_at_zero: bool) -> Self {
        if !y_min.is_finite() || !y_max.is_finite() {
            return Self { y_min: 0.0, y_max: 1.0 };
        }
        if begin_at_zero {
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let m = (y_max - y_min) * 0.02;
        // keep a zero baseline on the edge of the plot
        let lo = if begin_at_zero && y_min == 0.0 { 0.0 } else { y_min - m };
        let hi = if begin_at_zero && y_max == 0.0 { 0.0 } else { y_max + m };
        Self { y_min: lo, y_max: hi }
    }

    fn log10(y_min: f64, y_max: f64) -> Self {
        if !(y_min > 0.0) || !y_max.is_finite() {
            return Self { y_min: 1.0, y_max: 10.0 };
        }
        // snap outwards to whole decades
        let lo = 10f64.powi(y_min.log10().floor() as i32);
        let mut hi = 10f64.powi(y_max.log10().ceil() as i32);
        if hi <= lo { hi = lo * 10.0; }
        Self { y_min: lo, y_max: hi }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
