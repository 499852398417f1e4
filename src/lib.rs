//! Kinematic 2D box controller.
//!
//! Moves an axis-aligned box through a scene by casting fans of short line
//! queries out of each side, clamping the requested move so the box stops at
//! the first surface it meets, and then handing the resolved position to an
//! ordered pipeline of extensions (slopes, one-way platforms).
//!
//! The scene is anything implementing [`LineQuery`]; [`Scene`] is a small
//! in-memory implementation for tests, tools and simple games.

pub mod collision;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod movement;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{
    probe::{Collision, Prober},
    queries::{LineHit, LineQuery},
    scene::{Scene, SceneObject, SceneShape},
    state::CollisionState,
};
pub use controller::{CharacterController2D, MoveResult};
pub use crate::core::{
    collider::{BoxConfig, BoxGeometry},
    filter::{LayerMask, QueryFilter},
    types::{Corner, Direction},
};
pub use error::ConfigError;
pub use movement::{
    BaseResolver, ExtensionPipeline, MovementExtension, PlatformExtension, SlopeConfig,
    SlopeExtension,
};
pub use utils::allocator::ObjectId;
pub use utils::logging::StepReport;
pub use world::KinematicWorld;
