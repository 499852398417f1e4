use glam::Vec2;
use std::fmt;

use super::queries::LineQuery;
use crate::{
    config::MIN_RAY_COUNT,
    core::{collider::BoxGeometry, filter::QueryFilter, types::Direction},
    utils::{allocator::ObjectId, math::project_on_axis},
};

/// Contact found past one side of the box.
///
/// `point`, `normal` and `object` carry meaning only when `hit` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub hit: bool,
    /// World-space contact point.
    pub point: Vec2,
    /// Surface normal sampled next to the ray that hit; zero when it could not be sampled.
    pub normal: Vec2,
    pub object: Option<ObjectId>,
}

impl Collision {
    /// The no-hit sentinel.
    pub const NONE: Collision = Collision {
        hit: false,
        point: Vec2::ZERO,
        normal: Vec2::ZERO,
        object: None,
    };

    pub fn new(point: Vec2, normal: Vec2, object: Option<ObjectId>) -> Self {
        Self {
            hit: true,
            point,
            normal,
            object,
        }
    }
}

impl Default for Collision {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.hit {
            return f.write_str("no hit");
        }
        write!(f, "hit at {} normal {}", self.point, self.normal)?;
        if let Some(object) = self.object {
            write!(f, " object #{}", object.index())?;
        }
        Ok(())
    }
}

/// Casts ray fans out of the sides of a box placed at a given position.
///
/// A prober borrows the scene and the box geometry for the duration of one
/// movement resolution; it holds no state of its own.
pub struct Prober<'a, F> {
    scene: &'a dyn LineQuery<Filter = F>,
    geometry: &'a BoxGeometry,
    position: Vec2,
}

impl<F> Clone for Prober<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Prober<'_, F> {}

impl<'a, F: QueryFilter> Prober<'a, F> {
    pub fn new(
        scene: &'a dyn LineQuery<Filter = F>,
        geometry: &'a BoxGeometry,
        position: Vec2,
    ) -> Self {
        Self {
            scene,
            geometry,
            position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn geometry(&self) -> &'a BoxGeometry {
        self.geometry
    }

    /// The same prober with the box moved to `position`.
    pub fn at(&self, position: Vec2) -> Self {
        Self { position, ..*self }
    }

    /// World-space endpoints of the ray fan on `direction`, pulled in along the edge.
    pub fn fan(&self, direction: Direction) -> (Vec2, Vec2) {
        let (start, end) = direction.endpoints();
        let pull = self.geometry.inset() * direction.perpendicular();
        (
            self.position + self.geometry.corner(start) + pull,
            self.position + self.geometry.corner(end) - pull,
        )
    }

    /// Ray origins on `direction`, evenly spaced from the fan start to its end.
    pub fn ray_origins(&self, direction: Direction) -> impl Iterator<Item = Vec2> {
        let (start, end) = self.fan(direction);
        let count = self.geometry.ray_count(direction).max(MIN_RAY_COUNT);
        let last = (count - 1) as f32;
        (0..count).map(move |i| start.lerp(end, i as f32 / last))
    }

    /// Probes one side of the box along the matching component of `delta`.
    ///
    /// Rays are tried in fan order and the first one to hit is reported, even
    /// when a later ray would hit closer.
    pub fn probe(&self, direction: Direction, delta: Vec2, filter: &F) -> Collision {
        if filter.matches_nothing() {
            log::trace!("{direction} probe skipped: filter matches nothing");
            return Collision::NONE;
        }

        let travel = project_on_axis(delta, direction.axis());
        for origin in self.ray_origins(direction) {
            if let Some(hit) = self.scene.linecast(origin, origin + travel, filter) {
                let normal = self.sample_normal(origin, direction, filter);
                return Collision::new(hit.point, normal, Some(hit.object));
            }
        }
        Collision::NONE
    }

    /// Probes `direction` outward by a scalar `distance`.
    pub fn check_direction(&self, direction: Direction, distance: f32, filter: &F) -> Collision {
        self.probe(direction, direction.unit() * distance, filter)
    }

    /// Short query straddling `origin`, used to read the surface normal at the contact.
    fn sample_normal(&self, origin: Vec2, direction: Direction, filter: &F) -> Vec2 {
        let reach = direction.unit() * self.geometry.inset();
        self.scene
            .linecast(origin - reach, origin + reach, filter)
            .map_or(Vec2::ZERO, |hit| hit.normal)
    }
}
