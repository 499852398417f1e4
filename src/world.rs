//! Host-side container that moves many controllers through one static scene.

use glam::Vec2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    collision::scene::Scene,
    controller::{CharacterController2D, MoveResult},
    core::filter::LayerMask,
    error::{ConfigError, Result},
    utils::{
        allocator::{Arena, ObjectId},
        logging::{StepReport, StepTimer},
    },
};

struct ControlledBody {
    controller: CharacterController2D<LayerMask>,
    pending: Vec2,
    last_move: Option<MoveResult>,
}

impl ControlledBody {
    fn resolve(&mut self, scene: &Scene) {
        let delta = std::mem::take(&mut self.pending);
        self.last_move = Some(self.controller.update(scene, delta));
    }
}

/// Owns a [`Scene`] and a set of controllers, resolving queued moves once per step.
///
/// Controllers only collide with scene geometry, never with each other, so
/// their moves are independent and may be resolved in parallel.
pub struct KinematicWorld {
    pub scene: Scene,
    controllers: Arena<ControlledBody>,
    parallel_enabled: bool,
    last_report: Option<StepReport>,
}

impl Default for KinematicWorld {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}

impl KinematicWorld {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            controllers: Arena::new(),
            parallel_enabled: false,
            last_report: None,
        }
    }

    /// Has no effect unless the crate is built with the `parallel` feature.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled;
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    pub fn add_controller(&mut self, controller: CharacterController2D<LayerMask>) -> ObjectId {
        self.controllers.insert(ControlledBody {
            controller,
            pending: Vec2::ZERO,
            last_move: None,
        })
    }

    pub fn remove_controller(&mut self, id: ObjectId) -> Option<CharacterController2D<LayerMask>> {
        self.controllers.remove(id).map(|body| body.controller)
    }

    pub fn controller(&self, id: ObjectId) -> Option<&CharacterController2D<LayerMask>> {
        self.controllers.get(id).map(|body| &body.controller)
    }

    pub fn controller_mut(
        &mut self,
        id: ObjectId,
    ) -> Option<&mut CharacterController2D<LayerMask>> {
        self.controllers.get_mut(id).map(|body| &mut body.controller)
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    /// Adds `delta` to the move the controller will make on the next step.
    pub fn queue_move(&mut self, id: ObjectId, delta: Vec2) -> Result<()> {
        let body = self
            .controllers
            .get_mut(id)
            .ok_or(ConfigError::UnknownController(id))?;
        body.pending += delta;
        Ok(())
    }

    pub fn last_move(&self, id: ObjectId) -> Option<&MoveResult> {
        self.controllers.get(id).and_then(|body| body.last_move.as_ref())
    }

    /// Resolves every controller's queued move, including controllers with nothing queued,
    /// so that all collision states are refreshed.
    pub fn step(&mut self) -> Vec<(ObjectId, MoveResult)> {
        let parallel = self.parallel_enabled && cfg!(feature = "parallel");
        let timer = StepTimer::start(self.controllers.len(), parallel);
        if parallel {
            self.resolve_parallel();
        } else {
            self.resolve_sequential();
        }

        let results: Vec<_> = self
            .controllers
            .iter()
            .filter_map(|(id, body)| body.last_move.map(|result| (id, result)))
            .collect();
        let blocked = results.iter().filter(|(_, result)| result.was_blocked()).count();
        self.last_report = Some(timer.finish(blocked));
        results
    }

    /// Summary of the most recent [`step`](Self::step).
    pub fn last_step_report(&self) -> Option<&StepReport> {
        self.last_report.as_ref()
    }

    fn resolve_sequential(&mut self) {
        for (_, body) in self.controllers.iter_mut() {
            body.resolve(&self.scene);
        }
    }

    #[cfg(feature = "parallel")]
    fn resolve_parallel(&mut self) {
        let scene = &self.scene;
        self.controllers
            .slots_mut()
            .par_iter_mut()
            .flatten()
            .for_each(|body| body.resolve(scene));
    }

    #[cfg(not(feature = "parallel"))]
    fn resolve_parallel(&mut self) {
        self.resolve_sequential();
    }
}
