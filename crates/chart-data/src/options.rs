// File: crates/chart-data/src/options.rs
// Summary: Chart.js-compatible line chart configuration (axes, scale type, legend, title).

use serde::Serialize;

use crate::analysis::Analysis;
use crate::builder::ChartData;
use crate::error::Result;
use crate::mode::Mode;

pub const DEFAULT_TITLE: &str = "Line Graph";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
    Logarithmic,
}

impl From<Mode> for ScaleType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Logarithmic => ScaleType::Logarithmic,
            Mode::Simple | Mode::Linear => ScaleType::Linear,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

impl Title {
    pub fn shown(text: impl Into<String>) -> Self {
        Self { display: true, text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub title: Title,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineElement {
    pub tension: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Elements {
    pub line: LineElement,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
    pub elements: Elements,
}

impl ChartOptions {
    /// Axis titles are the raw field paths; the y scale follows the mode.
    pub fn new(x_path: &str, y_path: &str, mode: Mode) -> Self {
        Self {
            responsive: true,
            plugins: Plugins {
                legend: Legend { position: LegendPosition::Bottom },
                title: Title::shown(DEFAULT_TITLE),
            },
            scales: Scales {
                x: AxisOptions { begin_at_zero: None, title: Title::shown(x_path), scale_type: None },
                y: AxisOptions {
                    begin_at_zero: Some(true),
                    title: Title::shown(y_path),
                    scale_type: Some(mode.into()),
                },
            },
            elements: Elements { line: LineElement { tension: 0.0 } },
        }
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.plugins.title = Title::shown(text);
        self
    }

    pub fn y_scale(&self) -> ScaleType {
        self.scales.y.scale_type.unwrap_or(ScaleType::Linear)
    }

    pub fn begin_at_zero(&self) -> bool {
        self.scales.y.begin_at_zero.unwrap_or(false)
    }
}

/// Tooltip heading for a hovered point: `<y> (<x label>)`.
pub fn tooltip_title(y_label: &str, x_label: &str) -> String {
    format!("{y_label} ({x_label})")
}

/// Complete line chart handed to the chart library.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineChartSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
    #[serde(skip)]
    pub analysis: Analysis,
}

impl LineChartSpec {
    pub fn new(data: ChartData, options: ChartOptions, analysis: Analysis) -> Self {
        Self { kind: "line", data, options, analysis }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
