// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Chart, LineSeries, RenderOptions, Theme};
use chart_core::axis::CategoryAxis;
use skia_safe::Color;

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = CategoryAxis::new("X", vec!["a".into(), "b".into(), "c".into()]);
    chart.add_series(LineSeries::new("s", Color::from_argb(255, 255, 99, 132)).with_points(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)]));
    chart.autoscale_axes();

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left pixel is the opaque theme background
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn light_theme_background() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.width = 16;
    opts.height = 16;
    opts.theme = Theme::light();
    opts.draw_labels = false;
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    // corners lie outside the plot area
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
    assert_eq!(&px[px.len() - 4..], &[255, 255, 255, 255]);
}
