// File: crates/growth-core/tests/scale.rs
// Purpose: Index/value to pixel mapping and the y-range rule.

use approx::assert_relative_eq;
use growth_core::scale::{value_range, SampleScale, ValueScale};
use growth_core::Viewport;

#[test]
fn sample_scale_spans_plot_width() {
    let vp = Viewport::new(960.0, 540.0, 2.0);
    let xs = SampleScale::new(&vp, 121).unwrap();
    assert_relative_eq!(xs.to_px(0.0), 56.0);
    assert_relative_eq!(xs.to_px(120.0), 904.0);
    assert_relative_eq!(xs.to_px(60.0), 480.0);
    assert_relative_eq!(xs.from_px(480.0), 60.0, epsilon = 1e-4);
    assert_relative_eq!(xs.relative(56.0), 0.0);
    assert_relative_eq!(xs.relative(904.0), 1.0);
}

#[test]
fn sample_scale_needs_two_samples() {
    let vp = Viewport::default();
    assert!(SampleScale::new(&vp, 0).is_none());
    assert!(SampleScale::new(&vp, 1).is_none());
}

#[test]
fn value_scale_inverts_y() {
    let vp = Viewport::new(960.0, 540.0, 1.0);
    let ys = ValueScale::new(&vp, 100.0, 200.0);
    assert_relative_eq!(ys.to_px(100.0), 484.0);
    assert_relative_eq!(ys.to_px(200.0), 56.0);
    assert!(ys.to_px(180.0) < ys.to_px(120.0));
    assert_relative_eq!(ys.from_px(270.0), 150.0, epsilon = 1e-3);
}

#[test]
fn zero_range_uses_unit_denominator() {
    let vp = Viewport::new(960.0, 540.0, 1.0);
    let ys = ValueScale::new(&vp, 50.0, 50.0);
    let y = ys.to_px(50.0);
    assert!(y.is_finite());
    assert_relative_eq!(y, 484.0);
}

#[test]
fn range_from_first_sample_and_total_max() {
    let (lo, hi) = value_range(&[1_000.0, 1_100.0, 1_300.0]).unwrap();
    assert_relative_eq!(lo, 950.0);
    assert_relative_eq!(hi, 1_300.0);
    assert!(value_range(&[]).is_none());
}

#[test]
fn range_never_clips_a_dip_below_the_opening_value() {
    let (lo, _) = value_range(&[1_000.0, 900.0, 1_200.0]).unwrap();
    assert_relative_eq!(lo, 900.0);
}

#[test]
fn viewport_pixel_size_follows_dpr() {
    let vp = Viewport::from_physical(1920, 1080, 2.0);
    assert_relative_eq!(vp.width, 960.0);
    assert_relative_eq!(vp.height, 540.0);
    assert_eq!(vp.pixel_size(), (1920, 1080));
    assert_relative_eq!(vp.plot_width(), 848.0);
    assert_relative_eq!(vp.plot_height(), 428.0);
}
