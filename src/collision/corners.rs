use glam::Vec2;

use crate::core::{collider::BoxConfig, types::Corner};

/// The four skin-inset corners of the box, relative to its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    points: [Vec2; 4],
}

impl Corners {
    /// Derives corner positions from size, offset, scale and skin width.
    ///
    /// Degenerate extents are not an error: a zero half extent collapses an
    /// edge to a point and a negative one swaps its ends.
    pub fn compute(config: &BoxConfig) -> Self {
        let half = 0.5 * config.size * config.scale - Vec2::splat(config.skin_width);
        let scaled_offset = config.offset * config.scale;

        let mut points = [Vec2::ZERO; 4];
        points[Corner::TopRight.index()] = half + scaled_offset;
        points[Corner::TopLeft.index()] = Vec2::new(-half.x, half.y) + scaled_offset;
        points[Corner::BottomRight.index()] = Vec2::new(half.x, -half.y) + scaled_offset;
        points[Corner::BottomLeft.index()] = -half + scaled_offset;
        Self { points }
    }

    pub fn get(&self, corner: Corner) -> Vec2 {
        self.points[corner.index()]
    }
}
