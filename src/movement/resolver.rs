use glam::Vec2;

use crate::{
    collision::state::CollisionState,
    core::{collider::BoxGeometry, types::Direction},
};

/// Clamps a requested move against a collision snapshot.
///
/// Each axis is clamped independently and only toward the side the box is
/// moving, so a box already overlapping something can always move away.
pub struct BaseResolver;

impl BaseResolver {
    pub fn resolve(
        geometry: &BoxGeometry,
        start: Vec2,
        delta: Vec2,
        state: &CollisionState,
    ) -> Vec2 {
        let mut new_pos = start + delta;
        Self::clamp_horizontal(geometry, &mut new_pos, delta.x, state);
        Self::clamp_vertical(geometry, &mut new_pos, delta.y, state);
        new_pos
    }

    pub fn clamp_horizontal(
        geometry: &BoxGeometry,
        new_pos: &mut Vec2,
        delta_x: f32,
        state: &CollisionState,
    ) {
        if state.right.hit && delta_x > 0.0 {
            new_pos.x = state.right.point.x - geometry.half_extent(Direction::Right);
            log::trace!("clamped right at x = {}", new_pos.x);
        } else if state.left.hit && delta_x < 0.0 {
            new_pos.x = state.left.point.x + geometry.half_extent(Direction::Left);
            log::trace!("clamped left at x = {}", new_pos.x);
        }
    }

    pub fn clamp_vertical(
        geometry: &BoxGeometry,
        new_pos: &mut Vec2,
        delta_y: f32,
        state: &CollisionState,
    ) {
        if state.above.hit && delta_y > 0.0 {
            new_pos.y = state.above.point.y - geometry.half_extent(Direction::Top);
            log::trace!("clamped top at y = {}", new_pos.y);
        } else if state.below.hit && delta_y < 0.0 {
            new_pos.y = state.below.point.y + geometry.half_extent(Direction::Bottom);
            log::trace!("clamped bottom at y = {}", new_pos.y);
        }
    }
}
