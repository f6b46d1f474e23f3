// File: crates/chart-core/src/axis.rs
// Summary: Value axis (linear or log10) and the category axis built from chart labels.

use chart_data::ScaleType;

use crate::grid::{linear_ticks, log_ticks};
use crate::scale::ValueScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

impl From<ScaleType> for ScaleKind {
    fn from(t: ScaleType) -> Self {
        match t {
            ScaleType::Linear => ScaleKind::Linear,
            ScaleType::Logarithmic => ScaleKind::Log10,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Linear axes include zero when autoscaled.
    pub begin_at_zero: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, begin_at_zero: false }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { kind: ScaleKind::Log10, ..Self::new(label, min, max) }
    }

    pub fn value_scale(&self, top_px: f32, bottom_px: f32) -> ValueScale {
        match self.kind {
            ScaleKind::Linear => ValueScale::new_linear(top_px, bottom_px, self.min, self.max),
            ScaleKind::Log10 => ValueScale::new_log10(top_px, bottom_px, self.min, self.max),
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        match self.kind {
            ScaleKind::Linear => linear_ticks(self.min, self.max, 6),
            ScaleKind::Log10 => log_ticks(self.min, self.max),
        }
    }

    /// Whether `y` can be placed on this axis.
    pub fn accepts(&self, y: f64) -> bool {
        y.is_finite() && (self.kind == ScaleKind::Linear || y > 0.0)
    }
}

/// Evenly spaced categories, one per chart label.
#[derive(Clone, Debug, Default)]
pub struct CategoryAxis {
    pub label: String,
    pub categories: Vec<String>,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>, categories: Vec<String>) -> Self {
        Self { label: label.into(), categories }
    }

    pub fn len(&self) -> usize { self.categories.len() }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }
}
