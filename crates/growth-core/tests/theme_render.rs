// File: crates/growth-core/tests/theme_render.rs
// Purpose: Theme switches change pixels but never the computed series.

use growth_core::{project, AppConfig, Chart, ChartRenderer, RenderOptions, ThemeMode, Viewport};

#[test]
fn redraw_in_each_theme_leaves_series_untouched() {
    let projection = project(&AppConfig::default().inputs).unwrap();
    let before = projection.series.clone();
    let chart = Chart::new(&projection.series, projection.input.term_years);
    let renderer = ChartRenderer::new();

    let render = |mode: ThemeMode| {
        let opts = RenderOptions {
            viewport: Viewport::new(240.0, 160.0, 1.0),
            theme: mode.palette(),
            draw_labels: false,
            cursor_x: None,
        };
        let bytes = renderer.render_to_png_bytes(&chart, &opts).expect("render");
        image::load_from_memory(&bytes).expect("decode").to_rgba8()
    };

    let light = render(ThemeMode::Light);
    let dark = render(ThemeMode::Dark);
    assert_ne!(light.as_raw(), dark.as_raw());
    assert_eq!(light.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(dark.get_pixel(0, 0).0, [0x0b, 0x11, 0x19, 255]);
    assert_eq!(projection.series, before);
}

#[test]
fn theme_mode_parsing_and_resolution() {
    assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    assert_eq!(" Light\n".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
    assert!("sepia".parse::<ThemeMode>().is_err());
    assert_eq!(ThemeMode::resolve(Some(ThemeMode::Dark), Some(ThemeMode::Light)), ThemeMode::Dark);
    assert_eq!(ThemeMode::resolve(None, Some(ThemeMode::Dark)), ThemeMode::Dark);
    assert_eq!(ThemeMode::resolve(None, None), ThemeMode::Light);
    assert_eq!(ThemeMode::Dark.toggled().to_string(), "light");
}
