//! Wave-field renderer: one extrema sweep, then any number of frame renders.
//!
//! Construction validates the configuration, sweeps the whole
//! `width x height x frame_count` domain for global bounds, and allocates the
//! frame buffer.
//! Each [`render_frame`](WaveFieldRenderer::render_frame) call then maps the
//! field into one channel of that buffer:
//!
//! ```text
//! intensity = round((z - min) / (max - min) * 255)
//! ```
//!
//! Samples outside the swept bounds are logged and written anyway; the
//! integer intensity is truncated to the channel byte, wrapping modulo 256.

use std::thread;
use std::time::Duration;

use crate::config::RenderConfig;
use crate::error::FieldError;
use crate::extrema::Extrema;
use crate::field::{WaveField, WaveFunction};
use crate::frame::FrameBuffer;
use crate::sink::FrameConsumer;

/// Counters from the most recent [`WaveFieldRenderer::render_frame`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frame index that was rendered.
    pub frame: usize,
    /// Pixels whose sample fell outside the swept extrema.
    pub overshoots: usize,
}

/// Renders frames of a wave animation into an owned HSV frame buffer.
#[derive(Debug, Clone)]
pub struct WaveFieldRenderer {
    config: RenderConfig,
    field: WaveField,
    extrema: Extrema,
    frame: FrameBuffer,
    last_stats: Option<RenderStats>,
}

impl WaveFieldRenderer {
    /// Validates `config`, sweeps the field extrema, and allocates the frame.
    ///
    /// Returns `FieldError::InvalidDimensions` (before allocating anything) if
    /// width, height, or frame count is zero.
    #[tracing::instrument(level = "debug")]
    pub fn configure(config: RenderConfig) -> Result<Self, FieldError> {
        config.validate()?;
        let field = WaveField::new(config.field, config.width, config.height);
        let extrema = Extrema::sweep(&field, config.width, config.height, config.frame_count)?;
        let frame = FrameBuffer::filled(config.width, config.height, config.base)?;
        tracing::info!(
            width = config.width,
            height = config.height,
            frame_count = config.frame_count,
            field = config.field.name(),
            min = extrema.min,
            max = extrema.max,
            "renderer configured"
        );
        Ok(Self {
            config,
            field,
            extrema,
            frame,
            last_stats: None,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Global bounds found by the construction sweep.
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    /// The frame buffer as left by the last render (base color before any).
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn last_stats(&self) -> Option<RenderStats> {
        self.last_stats
    }

    /// Renders frame `t` in place and returns the updated buffer.
    ///
    /// Pixels are visited in raster order. Only the configured channel is
    /// written; the other two keep the base color. A sample outside the swept
    /// extrema produces a warning and its intensity is stored modulo 256
    /// instead of failing the render.
    ///
    /// Errors: `FrameOutOfRange` if `t >= frame_count`, `DegenerateRange` if
    /// the swept minimum equals the maximum. The buffer is untouched on error.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn render_frame(&mut self, t: usize) -> Result<&FrameBuffer, FieldError> {
        let frame_count = self.config.frame_count;
        if t >= frame_count {
            return Err(FieldError::FrameOutOfRange {
                frame: t,
                frame_count,
            });
        }
        if self.extrema.is_degenerate() {
            return Err(FieldError::DegenerateRange {
                value: self.extrema.min,
            });
        }

        let Extrema { min, max } = self.extrema;
        let span = self.extrema.span();
        let width = self.config.width;
        let channel = self.config.channel;
        let mut overshoots = 0;

        for (i, px) in self.frame.pixels_mut().iter_mut().enumerate() {
            let (x, y) = (i % width, i / width);
            let z = self.field.sample(x, y, t);
            let intensity = ((z - min) / span * 255.0).round();
            if !self.extrema.contains(z) {
                overshoots += 1;
                tracing::warn!(x, y, t, z, min, max, intensity, "sample outside swept extrema");
            }
            *px.channel_mut(channel) = wrap_to_byte(intensity);
        }

        self.last_stats = Some(RenderStats {
            frame: t,
            overshoots,
        });
        tracing::trace!(frame = t, overshoots, "rendered frame");
        Ok(&self.frame)
    }

    /// Renders every frame in order, handing each to `sink` and sleeping
    /// `delay` between consecutive frames.
    ///
    /// Stops at the first render or sink error and returns it.
    pub fn run_animation<S>(&mut self, delay: Duration, sink: &mut S) -> Result<(), FieldError>
    where
        S: FrameConsumer + ?Sized,
    {
        let frame_count = self.config.frame_count;
        tracing::debug!(frame_count, delay_ms = delay.as_millis() as u64, "starting animation");
        for t in 0..frame_count {
            if t > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }
            let frame = self.render_frame(t)?;
            sink.accept(frame)?;
        }
        tracing::debug!(frame_count, "animation finished");
        Ok(())
    }
}

/// Narrows a rounded intensity to a channel byte, keeping the low 8 bits.
fn wrap_to_byte(intensity: f64) -> u8 {
    intensity as i64 as u8
}
