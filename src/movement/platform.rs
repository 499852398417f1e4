use glam::Vec2;

use super::extensions::MovementExtension;
use crate::{
    collision::{probe::Prober, state::CollisionState},
    core::{filter::QueryFilter, types::Direction},
};

/// One-way platforms: blocks falling onto platform geometry, nothing else.
///
/// Probes only below the box, from where the move started, with a filter
/// kept apart from the solid one so the base resolver lets the box pass
/// through platforms in every other direction. A platform that stops the box
/// becomes the `below` contact of the move, so a box standing on one is
/// grounded. Thin segments work best as
/// platforms; a box that starts a fall inside a platform box is caught at
/// its current height.
pub struct PlatformExtension<F> {
    filter: F,
}

impl<F> PlatformExtension<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }
}

impl<F: QueryFilter + Send + Sync> MovementExtension<F> for PlatformExtension<F> {
    fn name(&self) -> &str {
        "platform"
    }

    fn adjust(
        &self,
        prober: &Prober<'_, F>,
        new_pos: &mut Vec2,
        delta: Vec2,
        state: &mut CollisionState,
    ) {
        if delta.y >= 0.0 {
            return;
        }
        let below = prober.probe(Direction::Bottom, delta, &self.filter);
        if below.hit {
            new_pos.y = below.point.y + prober.geometry().half_extent(Direction::Bottom);
            state.below = below;
        }
    }
}
