// File: crates/growth-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips, unless REQUIRE_SNAPSHOTS=1 makes a missing baseline fail.
// Bless once with `UPDATE_SNAPSHOTS=1 cargo test -p growth-core --test snapshot` and commit tests/__snapshots__/.

use growth_core::{project, Chart, ChartRenderer, RenderOptions, RawInput, ThemeMode, Viewport};

fn env_flag(name: &str) -> bool {
    std::env::var(name).ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn bless_mode() -> bool {
    env_flag("UPDATE_SNAPSHOTS")
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else if env_flag("REQUIRE_SNAPSHOTS") {
        panic!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(theme: ThemeMode) -> Vec<u8> {
    let raw = RawInput {
        principal: "5000".into(),
        rate_percent: "8".into(),
        years: "20".into(),
        contribution: "150".into(),
        ..RawInput::default()
    };
    let projection = project(&raw).expect("valid input");
    let chart = Chart::new(&projection.series, projection.input.term_years);
    let opts = RenderOptions {
        viewport: Viewport::new(480.0, 300.0, 1.0),
        theme: theme.palette(),
        draw_labels: false, // avoid text nondeterminism across platforms
        cursor_x: None,
    };
    ChartRenderer::new().render_to_png_bytes(&chart, &opts).expect("render bytes")
}

#[test]
fn golden_light_chart() {
    write_or_compare("growth_light.png", &render(ThemeMode::Light));
}

#[test]
fn golden_dark_chart() {
    write_or_compare("growth_dark.png", &render(ThemeMode::Dark));
}
