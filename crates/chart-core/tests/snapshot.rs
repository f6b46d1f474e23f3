// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic grouped chart (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the structural checks below still run.

use chart_core::{Chart, RenderOptions, Theme};
use chart_data::palette::CHART_COLORS;
use chart_data::{BenchmarkResult, ChartDataBuilder, ChartOptions, Mode, Site};
use serde_json::json;

fn render_bytes() -> Vec<u8> {
    let rows = [("A", 1, 4.0), ("B", 1, 2.0), ("A", 2, 3.0), ("B", 3, 3.5), ("A", 4, 1.0), ("C", 2, 0.5)];
    let results: Vec<_> = rows
        .iter()
        .map(|&(s, x, y)| BenchmarkResult::new(Site::new(s, s), json!({ "x": x, "y": y })))
        .collect();
    let data = ChartDataBuilder::new("x", "y").mode(Mode::Linear).grouped(true).build(&results);
    let chart = Chart::from_chart_data(&data, &ChartOptions::new("x", "y", Mode::Linear));

    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 300;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn count_near(img: &image::RgbaImage, rgb: [u8; 3], tolerance: i32) -> usize {
    img.pixels()
        .filter(|p| (0..3).all(|c| (p.0[c] as i32 - rgb[c] as i32).abs() <= tolerance))
        .count()
}

#[test]
fn grouped_chart_draws_each_site_line() {
    let img = image::load_from_memory(&render_bytes()).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (480, 300));

    let bg = Theme::default().background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r(), bg.g(), bg.b(), 255], "corner outside the plot is background");

    // sites A and B have several points, so their strokes show up as runs of pixels
    for (site, rgb) in ["A", "B"].iter().zip(&CHART_COLORS[..2]) {
        let n = count_near(&img, [rgb.r, rgb.g, rgb.b], 48);
        assert!(n >= 50, "site {site} line should be visible, found {n} pixels near {rgb}");
    }
}

#[test]
fn golden_grouped_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("grouped_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
