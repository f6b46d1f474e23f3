// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render from results to a PNG file.

use chart_core::{Chart, RenderOptions};
use chart_data::{BenchmarkResult, DottedPath, LineChartControls, Mode, Site};
use serde_json::json;

#[test]
fn render_smoke_png() {
    let results: Vec<_> = (0..12)
        .map(|i| {
            let site = if i % 2 == 0 { Site::new("ka", "Karlsruhe") } else { Site::new("md", "Madrid") };
            BenchmarkResult::new(site, json!({ "threads": 1 << (i / 2), "result": { "bw": 100.0 + i as f64 * 7.5 } }))
        })
        .collect();

    let mut controls = LineChartControls::with_axes("threads", "result.bw");
    let analysis = controls.analyze(&results, &DottedPath);
    controls.set_mode(Mode::Logarithmic, &analysis).expect("numeric x");
    controls.set_grouped(true);
    let spec = controls.render(&results, &DottedPath).expect("axes chosen");
    let chart = Chart::from_spec(&spec);
    assert_eq!(chart.series.len(), 2);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}
