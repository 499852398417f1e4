//! Collision probing: corner geometry, line queries, ray fans, and the per-side state snapshot.

pub mod corners;
pub mod queries;
pub mod scene;
pub mod probe;
pub mod state;

pub use corners::Corners;
pub use queries::{LineHit, LineQuery};
pub use scene::{Scene, SceneObject, SceneShape};
pub use probe::{Collision, Prober};
pub use state::CollisionState;
