use glam::Vec2;
use intro_core::*;

#[test]
fn centered_cursor_yields_zero_offset() {
    let offset = parallax_offset(Vec2::new(600.0, 400.0), Vec2::new(1200.0, 800.0));
    assert_eq!(offset, Vec2::ZERO);
}

#[test]
fn corners_deflect_to_the_full_range() {
    let viewport = Vec2::new(1200.0, 800.0);
    let top_left = parallax_offset(Vec2::ZERO, viewport);
    assert_eq!(top_left, Vec2::splat(-PARALLAX_RANGE_PX));
    let bottom_right = parallax_offset(viewport, viewport);
    assert_eq!(bottom_right, Vec2::splat(PARALLAX_RANGE_PX));
}

#[test]
fn offset_scales_linearly_with_cursor_distance() {
    let viewport = Vec2::new(1000.0, 1000.0);
    let quarter = parallax_offset(Vec2::new(750.0, 750.0), viewport);
    assert!((quarter.x - PARALLAX_RANGE_PX / 2.0).abs() < 1e-4);
    assert!((quarter.y - PARALLAX_RANGE_PX / 2.0).abs() < 1e-4);
}

#[test]
fn degenerate_viewport_yields_zero_offset() {
    assert_eq!(parallax_offset(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
    assert_eq!(
        parallax_offset(Vec2::new(10.0, 10.0), Vec2::new(100.0, 0.0)),
        Vec2::ZERO
    );
}

#[test]
fn backing_size_scales_by_the_device_pixel_ratio() {
    let size = scaled_backing_size(1200.0, 800.0, 1.0);
    assert_eq!((size.width, size.height), (1200, 800));
    assert_eq!(size.scale, 1.0);

    let size = scaled_backing_size(1200.0, 800.0, 1.5);
    assert_eq!((size.width, size.height), (1800, 1200));
    assert_eq!(size.scale, 1.5);
}

#[test]
fn backing_size_caps_dense_displays() {
    let size = scaled_backing_size(1200.0, 800.0, 3.0);
    assert_eq!(size.scale, DEVICE_PIXEL_RATIO_CAP);
    assert_eq!((size.width, size.height), (2400, 1600));
}

#[test]
fn backing_size_floors_fractional_pixels() {
    let size = scaled_backing_size(999.5, 601.25, 1.0);
    assert_eq!((size.width, size.height), (999, 601));
}

#[test]
fn backing_size_guards_degenerate_input() {
    // Unreported ratios fall back to 1:1
    let size = scaled_backing_size(1200.0, 800.0, 0.0);
    assert_eq!(size.scale, 1.0);

    // Zero-sized viewports still produce a valid backing store
    let size = scaled_backing_size(0.0, 0.0, 2.0);
    assert_eq!((size.width, size.height), (1, 1));
}
