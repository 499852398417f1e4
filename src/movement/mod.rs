//! Movement resolution: base per-axis clamping and the ordered extension pipeline.

pub mod resolver;
pub mod extensions;
pub mod slope;
pub mod platform;

pub use resolver::BaseResolver;
pub use extensions::{ExtensionPipeline, MovementExtension};
pub use slope::{SlopeConfig, SlopeExtension};
pub use platform::PlatformExtension;
