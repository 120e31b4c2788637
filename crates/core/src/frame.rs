//! Fixed-size HSV frame buffer.
//!
//! A `FrameBuffer` stores `width * height` [`Hsv`] pixels in row-major order.
//! It is allocated once, filled with a base color, and then rewritten in place
//! by the renderer. There is no way to resize it.

use crate::color::Hsv;
use crate::error::FieldError;

/// A 2D grid of HSV pixels with a fixed geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Hsv>,
}

impl FrameBuffer {
    /// Creates a frame filled with `base`.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, base: Hsv) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![base; len],
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major pixel data.
    pub fn pixels(&self) -> &[Hsv] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: usize, y: usize) -> Option<Hsv> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Hsv] {
        &mut self.pixels
    }

    /// Iterates over all pixels yielding `(x, y, pixel)` in raster order
    /// (x varies fastest).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Hsv)> + '_ {
        self.pixels.iter().enumerate().map(|(i, &px)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, px)
        })
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Hsv]> + '_ {
        self.pixels.chunks_exact(self.width)
    }
}
