//! Additional math helpers layered on top of `glam`.

use glam::Vec2;

/// Unsigned angle in degrees between `normal` and world up.
///
/// Returns `None` for a zero vector, which has no direction to measure.
pub fn angle_from_up_degrees(normal: Vec2) -> Option<f32> {
    let unit = normal.try_normalize()?;
    Some(unit.dot(Vec2::Y).clamp(-1.0, 1.0).acos().to_degrees())
}

/// Component-wise mask keeping only the axis `axis` is aligned to, with the sign of `v`.
pub fn project_on_axis(v: Vec2, axis: Vec2) -> Vec2 {
    v * axis.abs()
}

pub fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
