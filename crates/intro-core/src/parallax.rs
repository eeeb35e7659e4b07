use crate::constants::PARALLAX_RANGE_PX;
use glam::Vec2;

/// Map a cursor position to a small layer offset.
///
/// The cursor is normalized to [-1, 1] per axis around the viewport center
/// and scaled to `PARALLAX_RANGE_PX`, so the layer deflects fully at the
/// viewport edges and sits at the origin when the cursor is centered.
/// Returns zero for degenerate viewports.
pub fn parallax_offset(cursor: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    let normalized = (cursor / viewport - Vec2::splat(0.5)) * 2.0;
    normalized * PARALLAX_RANGE_PX
}
