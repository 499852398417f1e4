//! The kinematic box controller: probe, resolve, extend, commit.

use glam::Vec2;

use crate::{
    collision::{probe::Prober, queries::LineQuery, state::CollisionState},
    core::{
        collider::{BoxConfig, BoxGeometry},
        filter::{LayerMask, QueryFilter},
    },
    error::Result,
    movement::{
        extensions::{ExtensionPipeline, MovementExtension},
        resolver::BaseResolver,
    },
    utils::math::is_finite,
};

/// Outcome of one [`CharacterController2D::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub start: Vec2,
    pub position: Vec2,
    /// Delta that was asked for, after non-finite components were zeroed.
    pub requested: Vec2,
    /// Contacts of this move: the solid probe plus any contact an extension stopped on.
    pub collisions: CollisionState,
}

impl MoveResult {
    /// Distance actually travelled.
    pub fn displacement(&self) -> Vec2 {
        self.position - self.start
    }

    pub fn was_blocked(&self) -> bool {
        self.displacement() != self.requested
    }
}

/// Moves an axis-aligned box through a scene without letting it sink into solid geometry.
///
/// The controller owns its position and the single live [`CollisionState`];
/// the scene is passed to every [`update`](Self::update) so it is only
/// borrowed for the duration of one move.
pub struct CharacterController2D<F = LayerMask> {
    position: Vec2,
    geometry: BoxGeometry,
    solid_filter: F,
    extensions: ExtensionPipeline<F>,
    collisions: CollisionState,
}

impl<F: QueryFilter> CharacterController2D<F> {
    pub fn new(config: BoxConfig, solid_filter: F) -> Result<Self> {
        let geometry = BoxGeometry::new(config)?;
        log::debug!(
            "controller created: size {} scale {} skin {}",
            geometry.config().size,
            geometry.config().scale,
            geometry.config().skin_width
        );
        Ok(Self {
            position: Vec2::ZERO,
            geometry,
            solid_filter,
            extensions: ExtensionPipeline::new(),
            collisions: CollisionState::NONE,
        })
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Appends an extension; extensions run in the order they were added.
    pub fn with_extension<E: MovementExtension<F> + 'static>(mut self, extension: E) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleports the box without probing.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    pub fn solid_filter(&self) -> &F {
        &self.solid_filter
    }

    pub fn set_solid_filter(&mut self, filter: F) {
        self.solid_filter = filter;
    }

    pub fn extensions(&self) -> &ExtensionPipeline<F> {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut ExtensionPipeline<F> {
        &mut self.extensions
    }

    /// Contacts found by the last [`update`](Self::update).
    pub fn collisions(&self) -> &CollisionState {
        &self.collisions
    }

    pub fn is_grounded(&self) -> bool {
        self.collisions.is_grounded()
    }

    pub fn hits_ceiling(&self) -> bool {
        self.collisions.hits_ceiling()
    }

    pub fn touching_wall(&self) -> bool {
        self.collisions.touching_wall()
    }

    pub fn set_offset(&mut self, offset: Vec2) -> Result<()> {
        self.geometry.set_offset(offset)
    }

    pub fn set_scale(&mut self, scale: Vec2) -> Result<()> {
        self.geometry.set_scale(scale)
    }

    pub fn set_size(&mut self, size: Vec2) -> Result<()> {
        self.geometry.set_size(size)
    }

    pub fn reconfigure(&mut self, config: BoxConfig) -> Result<()> {
        self.geometry.reconfigure(config)
    }

    /// Prober for the box at its current position.
    pub fn prober<'a>(&'a self, scene: &'a dyn LineQuery<Filter = F>) -> Prober<'a, F> {
        Prober::new(scene, &self.geometry, self.position)
    }

    /// Moves the box by `delta`, stopping at solid geometry and applying extensions.
    pub fn update(&mut self, scene: &dyn LineQuery<Filter = F>, delta: Vec2) -> MoveResult {
        let delta = sanitize(delta);
        let start = self.position;

        let prober = Prober::new(scene, &self.geometry, start);
        let mut collisions = prober.recompute(delta, &self.solid_filter);
        let mut new_pos = BaseResolver::resolve(&self.geometry, start, delta, &collisions);
        self.extensions.apply(&prober, &mut new_pos, delta, &mut collisions);

        self.collisions = collisions;
        self.position = new_pos;
        MoveResult {
            start,
            position: new_pos,
            requested: delta,
            collisions,
        }
    }
}

fn sanitize(delta: Vec2) -> Vec2 {
    if is_finite(delta) {
        return delta;
    }
    log::warn!("non-finite move delta {delta} ignored on the affected axes");
    Vec2::new(
        if delta.x.is_finite() { delta.x } else { 0.0 },
        if delta.y.is_finite() { delta.y } else { 0.0 },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::scene::Scene;

    #[test]
    fn non_finite_delta_axes_are_dropped() {
        let scene = Scene::new();
        let mut controller =
            CharacterController2D::new(BoxConfig::default(), LayerMask::empty().with(0)).unwrap();
        let result = controller.update(&scene, Vec2::new(f32::NAN, 1.0));
        assert_eq!(result.requested, Vec2::new(0.0, 1.0));
        assert_eq!(controller.position(), Vec2::new(0.0, 1.0));
        assert!(!result.was_blocked());
    }
}
