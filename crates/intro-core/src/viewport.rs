use crate::constants::DEVICE_PIXEL_RATIO_CAP;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
    /// Scale the drawing transform must apply so rendering stays in CSS pixels.
    pub scale: f64,
}

/// Compute the canvas backing-store size for a CSS-pixel viewport.
///
/// The device pixel ratio is capped at `DEVICE_PIXEL_RATIO_CAP`; unreported
/// or degenerate ratios fall back to 1:1.
pub fn scaled_backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> BackingSize {
    let scale = if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(DEVICE_PIXEL_RATIO_CAP)
    } else {
        1.0
    };
    BackingSize {
        width: ((css_width * scale).floor() as u32).max(1),
        height: ((css_height * scale).floor() as u32).max(1),
        scale,
    }
}
