// File: crates/chart-core/src/lib.rs
// Summary: Renderer entry point; turns derived chart data into line charts drawn with Skia.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod view;
pub mod theme;

pub use chart::{Chart, RenderOptions};
pub use series::LineSeries;
pub use axis::{Axis, CategoryAxis, ScaleKind};
pub use view::ViewState;
pub use theme::Theme;
