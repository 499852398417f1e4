use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::queries::{segment_aabb, segment_segment, LineHit, LineQuery};
use crate::{
    core::filter::LayerMask,
    utils::allocator::{Arena, ObjectId},
};

/// Geometry of a static scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneShape {
    /// Axis-aligned solid box.
    Box { center: Vec2, half_extents: Vec2 },
    /// Two-sided edge, typically used for slopes.
    Segment { a: Vec2, b: Vec2 },
}

/// Static object participating in line queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub shape: SceneShape,
    /// Layer id matched against the query's [`LayerMask`].
    pub layer: u32,
}

impl SceneObject {
    fn intersect(&self, from: Vec2, to: Vec2) -> Option<(f32, Vec2)> {
        match self.shape {
            SceneShape::Box {
                center,
                half_extents,
            } => {
                let half = half_extents.abs();
                segment_aabb(from, to, center - half, center + half)
            }
            SceneShape::Segment { a, b } => segment_segment(from, to, a, b),
        }
    }
}

/// In-memory static scene answering [`LineQuery`] by brute force.
///
/// Suitable for tests, tools and small levels; hosts with their own spatial
/// structures implement [`LineQuery`] directly.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Arena<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        self.objects.insert(object)
    }

    pub fn add_box(&mut self, center: Vec2, half_extents: Vec2, layer: u32) -> ObjectId {
        self.insert(SceneObject {
            shape: SceneShape::Box {
                center,
                half_extents,
            },
            layer,
        })
    }

    /// Adds an axis-aligned box spanning `min..max`.
    pub fn add_rect(&mut self, min: Vec2, max: Vec2, layer: u32) -> ObjectId {
        self.add_box((min + max) * 0.5, (max - min) * 0.5, layer)
    }

    pub fn add_segment(&mut self, a: Vec2, b: Vec2, layer: u32) -> ObjectId {
        self.insert(SceneObject {
            shape: SceneShape::Segment { a, b },
            layer,
        })
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.remove(id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl LineQuery for Scene {
    type Filter = LayerMask;

    fn linecast(&self, from: Vec2, to: Vec2, filter: &LayerMask) -> Option<LineHit> {
        let mut nearest: Option<LineHit> = None;

        for (id, object) in self.objects.iter() {
            if !filter.contains(object.layer) {
                continue;
            }
            let Some((fraction, normal)) = object.intersect(from, to) else {
                continue;
            };
            if nearest.is_some_and(|best| best.fraction <= fraction) {
                continue;
            }
            nearest = Some(LineHit {
                point: from.lerp(to, fraction),
                normal,
                object: id,
                fraction,
            });
        }

        nearest
    }
}
