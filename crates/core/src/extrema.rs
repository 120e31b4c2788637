//! Exhaustive min/max sweep over a field's full coordinate and time domain.
//!
//! The sweep folds `floor(z)` into the minimum and `ceil(z)` into the
//! maximum, so both bounds are integral and every sampled value lies within
//! them. It runs once per renderer configuration and is never incremental.

use serde::Serialize;

use crate::error::FieldError;
use crate::field::WaveFunction;

/// Global bounds of a field over `width x height x frame_count` samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    /// Evaluates `field` at every `(x, y, t)` and folds the integral bounds.
    ///
    /// Returns `FieldError::InvalidDimensions` if the domain is empty, since
    /// there would be no sample to bound.
    pub fn sweep<F>(
        field: &F,
        width: usize,
        height: usize,
        frame_count: usize,
    ) -> Result<Self, FieldError>
    where
        F: WaveFunction + ?Sized,
    {
        if width == 0 || height == 0 || frame_count == 0 {
            return Err(FieldError::InvalidDimensions);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for x in 0..width {
            for y in 0..height {
                for t in 0..frame_count {
                    let z = field.sample(x, y, t);
                    min = min.min(z.floor());
                    max = max.max(z.ceil());
                }
            }
        }

        tracing::debug!(width, height, frame_count, min, max, "swept field extrema");
        Ok(Self { min, max })
    }

    /// Returns true if `z` lies within `[min, max]`.
    pub fn contains(&self, z: f64) -> bool {
        self.min <= z && z <= self.max
    }

    /// Width of the range, `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the range collapsed to a single value.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}
