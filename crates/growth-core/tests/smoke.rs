// File: crates/growth-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests (PNG file, PNG bytes, RGBA buffer, empty series).

use growth_core::{project, AppConfig, Chart, ChartRenderer, ProjectionSeries, RenderOptions, Viewport};

#[test]
fn render_smoke_png() {
    let projection = project(&AppConfig::default().inputs).expect("default inputs are valid");
    let chart = Chart::new(&projection.series, projection.input.term_years);
    let renderer = ChartRenderer::new();

    let mut opts = RenderOptions::default();
    opts.cursor_x = Some(400.0);
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = renderer.render_to_png_bytes(&chart, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer_at_device_pixel_ratio() {
    let projection = project(&AppConfig::default().inputs).unwrap();
    let chart = Chart::new(&projection.series, projection.input.term_years);
    let opts = RenderOptions { viewport: Viewport::new(320.0, 200.0, 2.0), draw_labels: false, ..RenderOptions::default() };

    let (px, w, h, stride) = ChartRenderer::new().render_to_rgba8(&chart, &opts).expect("rgba render");
    assert_eq!((w, h), (640, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);
    // Opaque background in the top-left pixel.
    assert_eq!(px[3], 255);
}

#[test]
fn empty_series_draws_grid_only() {
    let empty = ProjectionSeries::empty();
    let chart = Chart::new(&empty, 0);
    let opts = RenderOptions { viewport: Viewport::new(200.0, 150.0, 1.0), cursor_x: Some(100.0), ..RenderOptions::default() };
    let (px, _, _, _) = ChartRenderer::new().render_to_rgba8(&chart, &opts).expect("empty render");

    // No green total line anywhere.
    let green = px.chunks_exact(4).any(|p| p[0] < 40 && p[1] > 150 && p[2] < 110);
    assert!(!green);
}
