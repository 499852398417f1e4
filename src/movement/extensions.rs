use glam::Vec2;

use crate::{
    collision::{probe::Prober, state::CollisionState},
    core::filter::QueryFilter,
};

/// Adjustment applied to a resolved position after the base resolver.
///
/// `prober` is placed at the position the move started from and shares the
/// controller's scene and box geometry; extensions probe with their own
/// filter. `state` starts as the solid probe of the move and is committed
/// to the controller afterwards, so an extension that stops the box on
/// something records that contact in the matching slot.
pub trait MovementExtension<F>: Send + Sync {
    /// Label used in logs and in [`ExtensionPipeline::names`].
    fn name(&self) -> &str;

    fn adjust(
        &self,
        prober: &Prober<'_, F>,
        new_pos: &mut Vec2,
        delta: Vec2,
        state: &mut CollisionState,
    );
}

/// Ordered list of extensions run after base resolution.
///
/// Extensions run strictly in registration order. Nothing arbitrates between
/// them: a later extension sees, and may overwrite, an earlier one's result.
pub struct ExtensionPipeline<F> {
    extensions: Vec<Box<dyn MovementExtension<F>>>,
}

impl<F> Default for ExtensionPipeline<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> ExtensionPipeline<F> {
    pub fn new() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    pub fn push<E: MovementExtension<F> + 'static>(&mut self, extension: E) {
        self.extensions.push(Box::new(extension));
    }

    pub fn with<E: MovementExtension<F> + 'static>(mut self, extension: E) -> Self {
        self.push(extension);
        self
    }

    /// Inserts at `index`, shifting later extensions back. `index` is clamped to the length.
    pub fn insert<E: MovementExtension<F> + 'static>(&mut self, index: usize, extension: E) {
        let index = index.min(self.extensions.len());
        self.extensions.insert(index, Box::new(extension));
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn MovementExtension<F>>> {
        (index < self.extensions.len()).then(|| self.extensions.remove(index))
    }

    pub fn clear(&mut self) {
        self.extensions.clear();
    }

    /// Extension names in the order they run.
    pub fn names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl<F: QueryFilter> ExtensionPipeline<F> {
    pub fn apply(
        &self,
        prober: &Prober<'_, F>,
        new_pos: &mut Vec2,
        delta: Vec2,
        state: &mut CollisionState,
    ) {
        for extension in &self.extensions {
            let before = *new_pos;
            extension.adjust(prober, new_pos, delta, state);
            if *new_pos != before {
                log::trace!(
                    "{} moved position {} -> {}",
                    extension.name(),
                    before,
                    new_pos
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collision::scene::Scene,
        core::{collider::{BoxConfig, BoxGeometry}, filter::LayerMask},
    };

    struct SetX(f32, &'static str);

    impl MovementExtension<LayerMask> for SetX {
        fn name(&self) -> &str {
            self.1
        }

        fn adjust(
            &self,
            _prober: &Prober<'_, LayerMask>,
            new_pos: &mut Vec2,
            _delta: Vec2,
            _state: &mut CollisionState,
        ) {
            new_pos.x = self.0;
        }
    }

    #[test]
    fn later_extensions_win() {
        let scene = Scene::new();
        let geometry = BoxGeometry::new(BoxConfig::default()).unwrap();
        let prober = Prober::new(&scene, &geometry, Vec2::ZERO);

        let mut pipeline: ExtensionPipeline<LayerMask> = ExtensionPipeline::new()
            .with(SetX(1.0, "first"))
            .with(SetX(2.0, "second"));
        let mut pos = Vec2::ZERO;
        let mut state = CollisionState::NONE;
        pipeline.apply(&prober, &mut pos, Vec2::X, &mut state);
        assert_eq!(pos.x, 2.0);

        pipeline.insert(5, SetX(3.0, "third"));
        assert_eq!(pipeline.names(), vec!["first", "second", "third"]);
        pipeline.apply(&prober, &mut pos, Vec2::X, &mut state);
        assert_eq!(pos.x, 3.0);
        assert_eq!(state, CollisionState::NONE);

        let removed = pipeline.remove(2).expect("third is registered");
        assert_eq!(removed.name(), "third");
        assert!(pipeline.remove(7).is_none());
        assert_eq!(pipeline.len(), 2);
    }
}
