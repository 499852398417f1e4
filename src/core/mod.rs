//! Core types describing the controlled box, its sides, and query filters.

pub mod types;
pub mod collider;
pub mod filter;

pub use types::{Corner, Direction};
pub use collider::{BoxConfig, BoxConfigBuilder, BoxGeometry};
pub use filter::{LayerMask, QueryFilter};
