//! Error types for configuration validation.
//!
//! Probing and movement resolution never fail; every error in this crate is
//! raised when a configuration is set, before any movement happens.

use std::fmt;

use crate::utils::allocator::ObjectId;

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Skin width must be zero or positive.
    NegativeSkinWidth(f32),
    /// Corner inset must be zero or positive.
    NegativeInset(f32),
    /// A numeric field held NaN or an infinity.
    NonFinite { field: &'static str },
    /// Slope limit outside `[0, 90)` degrees.
    InvalidSlopeAngle(f32),
    /// No controller is registered under the id.
    UnknownController(ObjectId),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NegativeSkinWidth(value) => {
                write!(f, "skin width must be >= 0, got {value}")
            }
            Self::NegativeInset(value) => write!(f, "corner inset must be >= 0, got {value}"),
            Self::NonFinite { field } => write!(f, "`{field}` must be finite"),
            Self::InvalidSlopeAngle(value) => {
                write!(f, "max slope must lie in [0, 90) degrees, got {value}")
            }
            Self::UnknownController(id) => write!(
                f,
                "no controller registered at index {} (generation {})",
                id.index(),
                id.generation()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenient Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
