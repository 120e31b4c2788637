//! Renderer configuration.
//!
//! A [`RenderConfig`] fixes the frame geometry, animation length, base color,
//! written channel, and wave function. It is consumed by
//! [`WaveFieldRenderer::configure`](crate::renderer::WaveFieldRenderer::configure)
//! and cannot be changed afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::{Channel, Hsv};
use crate::error::FieldError;
use crate::field::FieldKind;
use crate::params::{param_hsv, param_string, param_usize};

/// Default frame width in pixels.
pub const DEFAULT_WIDTH: usize = 900;
/// Default frame height in pixels.
pub const DEFAULT_HEIGHT: usize = 600;
/// Default animation length in frames.
pub const DEFAULT_FRAME_COUNT: usize = 100;
/// Default base color: a fully saturated blue (hue 120 of 180).
pub const DEFAULT_BASE: Hsv = Hsv::new(120, 255, 255);

/// Geometry and appearance of a wave animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub frame_count: usize,
    /// Color of every pixel before the renderer writes its channel.
    pub base: Hsv,
    /// Channel that receives the normalized field intensity.
    pub channel: Channel,
    pub field: FieldKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_count: DEFAULT_FRAME_COUNT,
            base: DEFAULT_BASE,
            channel: Channel::default(),
            field: FieldKind::default(),
        }
    }
}

impl RenderConfig {
    /// Configuration with the given geometry and base color; channel and
    /// field take their defaults.
    pub fn new(width: usize, height: usize, frame_count: usize, base: Hsv) -> Self {
        Self {
            width,
            height,
            frame_count,
            base,
            ..Self::default()
        }
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_field(mut self, field: FieldKind) -> Self {
        self.field = field;
        self
    }

    /// Builds a configuration from a loose JSON object, falling back to
    /// defaults for missing or mistyped keys.
    ///
    /// Recognized keys: `width`, `height`, `frame_count`, `base` (`[h, s, v]`),
    /// `channel`, `field`. Unknown channel or field names are rejected.
    pub fn from_json(params: &Value) -> Result<Self, FieldError> {
        let defaults = Self::default();
        let channel = param_string(params, "channel", defaults.channel.name());
        let field = param_string(params, "field", defaults.field.name());
        Ok(Self {
            width: param_usize(params, "width", defaults.width),
            height: param_usize(params, "height", defaults.height),
            frame_count: param_usize(params, "frame_count", defaults.frame_count),
            base: param_hsv(params, "base", defaults.base),
            channel: Channel::from_name(&channel)?,
            field: FieldKind::from_name(&field)?,
        })
    }

    /// Checks that every dimension is non-zero and the pixel count fits in `usize`.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 || self.frame_count == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(())
    }
}
