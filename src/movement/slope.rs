use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::extensions::MovementExtension;
use crate::{
    collision::{probe::Prober, state::CollisionState},
    config::DEFAULT_MAX_SLOPE_DEGREES,
    core::{filter::QueryFilter, types::Direction},
    error::{ConfigError, Result},
    utils::math::angle_from_up_degrees,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeConfig {
    /// Steepest surface, in degrees from up, that can be walked up.
    pub max_slope_degrees: f32,
}

impl Default for SlopeConfig {
    fn default() -> Self {
        Self {
            max_slope_degrees: DEFAULT_MAX_SLOPE_DEGREES,
        }
    }
}

impl SlopeConfig {
    pub fn validated(self) -> Result<Self> {
        let angle = self.max_slope_degrees;
        if !angle.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "max_slope_degrees",
            });
        }
        if !(0.0..90.0).contains(&angle) {
            return Err(ConfigError::InvalidSlopeAngle(angle));
        }
        Ok(self)
    }
}

/// Turns horizontal movement into diagonal movement along walkable slopes.
///
/// Probes the side the box is moving toward from the partially resolved
/// position. On a slope no steeper than the limit it re-applies the
/// horizontal delta and lifts the box by `tan(angle) * |delta.x|`. Slope
/// geometry is expected to also be part of the solid filter, so the base
/// resolver has already stopped the box at the slope's foot.
pub struct SlopeExtension<F> {
    filter: F,
    max_slope_degrees: f32,
}

impl<F> SlopeExtension<F> {
    pub fn new(filter: F, config: SlopeConfig) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self {
            filter,
            max_slope_degrees: config.max_slope_degrees,
        })
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn max_slope_degrees(&self) -> f32 {
        self.max_slope_degrees
    }
}

impl<F: QueryFilter + Send + Sync> MovementExtension<F> for SlopeExtension<F> {
    fn name(&self) -> &str {
        "slope"
    }

    fn adjust(
        &self,
        prober: &Prober<'_, F>,
        new_pos: &mut Vec2,
        delta: Vec2,
        _state: &mut CollisionState,
    ) {
        if delta.x == 0.0 {
            return;
        }
        let direction = if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };

        let slope = prober.at(*new_pos).probe(direction, delta, &self.filter);
        if !slope.hit {
            return;
        }
        // A zero normal means the surface was out of reach of the sampling ray.
        let Some(angle) = angle_from_up_degrees(slope.normal) else {
            return;
        };
        if angle > self.max_slope_degrees {
            return;
        }

        let vertical_offset = angle.to_radians().tan() * delta.x.abs();
        *new_pos += Vec2::new(delta.x, vertical_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_limit_must_be_below_vertical() {
        assert!(SlopeConfig::default().validated().is_ok());
        assert_eq!(
            SlopeConfig {
                max_slope_degrees: 90.0
            }
            .validated(),
            Err(ConfigError::InvalidSlopeAngle(90.0))
        );
        assert_eq!(
            SlopeConfig {
                max_slope_degrees: -1.0
            }
            .validated(),
            Err(ConfigError::InvalidSlopeAngle(-1.0))
        );
        assert!(SlopeExtension::new(0u32, SlopeConfig { max_slope_degrees: f32::NAN }).is_err());
    }
}
