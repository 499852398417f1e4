//! Default configuration constants for the kinematic box controller.

/// Default inward margin subtracted from the box half extent.
pub const DEFAULT_SKIN_WIDTH: f32 = 0.01;

/// Default number of rays cast along each edge.
pub const DEFAULT_RAY_COUNT: usize = 4;

/// Smallest ray fan that still spans both corners of an edge.
pub const MIN_RAY_COUNT: usize = 2;

/// Offset applied to fan endpoints so adjacent edges do not report each other's contacts.
pub const DEFAULT_CORNER_INSET: f32 = 0.01;

/// Steepest slope (degrees from up) the slope extension will climb by default.
pub const DEFAULT_MAX_SLOPE_DEGREES: f32 = 45.0;

/// Highest layer id a `LayerMask` accepts.
pub const MAX_LAYER: u32 = 1023;
