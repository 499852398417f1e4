//! Utility helpers: generational storage, logging, and math extensions.

pub mod allocator;
pub mod logging;
pub mod math;

pub use allocator::{Arena, ObjectId};
pub use logging::StepReport;
pub use math::*;
