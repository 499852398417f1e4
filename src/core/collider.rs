use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::types::{Corner, Direction};
use crate::{
    collision::corners::Corners,
    config::{DEFAULT_CORNER_INSET, DEFAULT_RAY_COUNT, DEFAULT_SKIN_WIDTH, MIN_RAY_COUNT},
    error::{ConfigError, Result},
    utils::math::is_finite,
};

/// Static description of the controlled box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Unscaled box size.
    pub size: Vec2,
    /// Offset of the box centre from the controller position, before scaling.
    pub offset: Vec2,
    /// Per-axis scale applied to both size and offset.
    pub scale: Vec2,
    pub skin_width: f32,
    /// Rays cast along the left and right edges.
    pub horizontal_rays: usize,
    /// Rays cast along the top and bottom edges.
    pub vertical_rays: usize,
    /// Pull-in applied to fan endpoints along the edge.
    pub corner_inset: f32,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            size: Vec2::ONE,
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
            skin_width: DEFAULT_SKIN_WIDTH,
            horizontal_rays: DEFAULT_RAY_COUNT,
            vertical_rays: DEFAULT_RAY_COUNT,
            corner_inset: DEFAULT_CORNER_INSET,
        }
    }
}

impl BoxConfig {
    pub fn builder() -> BoxConfigBuilder {
        BoxConfigBuilder::new()
    }

    /// Checks the configuration and returns its normalised form.
    ///
    /// Ray counts below [`MIN_RAY_COUNT`] are raised to it; everything else
    /// that cannot be probed with is rejected.
    pub fn validated(mut self) -> Result<Self> {
        check_vec("size", self.size)?;
        check_vec("offset", self.offset)?;
        check_vec("scale", self.scale)?;
        check_scalar("skin_width", self.skin_width)?;
        check_scalar("corner_inset", self.corner_inset)?;
        if self.skin_width < 0.0 {
            return Err(ConfigError::NegativeSkinWidth(self.skin_width));
        }
        if self.corner_inset < 0.0 {
            return Err(ConfigError::NegativeInset(self.corner_inset));
        }

        if self.horizontal_rays < MIN_RAY_COUNT {
            log::warn!(
                "horizontal ray count {} raised to {MIN_RAY_COUNT}",
                self.horizontal_rays
            );
            self.horizontal_rays = MIN_RAY_COUNT;
        }
        if self.vertical_rays < MIN_RAY_COUNT {
            log::warn!(
                "vertical ray count {} raised to {MIN_RAY_COUNT}",
                self.vertical_rays
            );
            self.vertical_rays = MIN_RAY_COUNT;
        }
        Ok(self)
    }
}

fn check_scalar(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn check_vec(field: &'static str, value: Vec2) -> Result<()> {
    if is_finite(value) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

pub struct BoxConfigBuilder {
    config: BoxConfig,
}

impl Default for BoxConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: BoxConfig::default(),
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.config.size = size;
        self
    }

    pub fn offset(mut self, offset: Vec2) -> Self {
        self.config.offset = offset;
        self
    }

    pub fn scale(mut self, scale: Vec2) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn skin_width(mut self, skin_width: f32) -> Self {
        self.config.skin_width = skin_width;
        self
    }

    pub fn rays(mut self, horizontal: usize, vertical: usize) -> Self {
        self.config.horizontal_rays = horizontal;
        self.config.vertical_rays = vertical;
        self
    }

    pub fn corner_inset(mut self, inset: f32) -> Self {
        self.config.corner_inset = inset;
        self
    }

    pub fn build(self) -> BoxConfig {
        self.config
    }
}

/// Validated box configuration together with its derived corner positions.
///
/// Corners are recomputed on every geometry edit and are otherwise read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    config: BoxConfig,
    corners: Corners,
}

impl BoxGeometry {
    pub fn new(config: BoxConfig) -> Result<Self> {
        let config = config.validated()?;
        let corners = Corners::compute(&config);
        Ok(Self { config, corners })
    }

    pub fn config(&self) -> &BoxConfig {
        &self.config
    }

    pub fn corners(&self) -> &Corners {
        &self.corners
    }

    pub fn corner(&self, corner: Corner) -> Vec2 {
        self.corners.get(corner)
    }

    pub fn ray_count(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.config.horizontal_rays
        } else {
            self.config.vertical_rays
        }
    }

    pub fn inset(&self) -> f32 {
        self.config.corner_inset
    }

    /// Distance from the box position to its skin-inset face on `direction`.
    ///
    /// With zero offset this is `0.5 * size * scale - skin_width` on the
    /// direction's axis.
    pub fn half_extent(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Right => self.corner(Corner::TopRight).x,
            Direction::Left => -self.corner(Corner::BottomLeft).x,
            Direction::Top => self.corner(Corner::TopRight).y,
            Direction::Bottom => -self.corner(Corner::BottomLeft).y,
        }
    }

    pub fn set_offset(&mut self, offset: Vec2) -> Result<()> {
        self.reconfigure(BoxConfig {
            offset,
            ..self.config
        })
    }

    pub fn set_scale(&mut self, scale: Vec2) -> Result<()> {
        self.reconfigure(BoxConfig {
            scale,
            ..self.config
        })
    }

    pub fn set_size(&mut self, size: Vec2) -> Result<()> {
        self.reconfigure(BoxConfig { size, ..self.config })
    }

    /// Replaces the configuration; on error the previous geometry is kept.
    pub fn reconfigure(&mut self, config: BoxConfig) -> Result<()> {
        *self = Self::new(config)?;
        log::debug!("box geometry rebuilt: {:?}", self.corners);
        Ok(())
    }
}
