//! Closed-form wave functions sampled per pixel and per frame.
//!
//! Every function is pure: the same `(x, y, t)` always yields the same value.
//! Geometry (the half extents used to place wave sources) is fixed when the
//! function is built, so sampling never allocates or mutates.

use std::f64::consts::PI;
use std::hint::black_box;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Amplitude shared by the built-in wave functions.
const AMPLITUDE: f64 = 10.0;

/// A deterministic scalar function of pixel coordinates and frame index.
///
/// This trait is object-safe so callers can hold a `&dyn WaveFunction`.
pub trait WaveFunction {
    /// Evaluates the field at pixel `(x, y)` of frame `t`.
    fn sample(&self, x: usize, y: usize, t: usize) -> f64;
}

/// Selects one of the built-in wave functions by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Three phase-shifted sinusoids of the distance to a source left of the frame.
    #[default]
    Interference,
    /// Two sinusoids of the distance to the frame center.
    Ripple,
}

const FIELD_NAMES: &[&str] = &["interference", "ripple"];

impl FieldKind {
    /// Parses a field kind by name.
    ///
    /// Returns `FieldError::UnknownField` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "interference" => Ok(FieldKind::Interference),
            "ripple" => Ok(FieldKind::Ripple),
            _ => Err(FieldError::UnknownField(name.to_string())),
        }
    }

    /// Returns a slice of all recognized field names.
    pub fn list_names() -> &'static [&'static str] {
        FIELD_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Interference => "interference",
            FieldKind::Ripple => "ripple",
        }
    }
}

/// Interference pattern of a single source placed at `(-width/2, height/2)`.
///
/// ```text
/// rho_l = |(x, y) - (-width/2, height/2)|
/// z     = 10 * sin(rho_l/16 - t*PI/12) * sin(rho_l/24 - t*PI/10) * sin(rho_l/40 - t*PI/8)
/// ```
///
/// The polar angle and the distance to the frame center are evaluated on
/// every sample as well but do not feed `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interference {
    half_width: f64,
    half_height: f64,
}

impl Interference {
    /// Builds the function for a `width x height` frame. Halves are integer
    /// divisions, so odd extents round the source position down.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            half_width: (width / 2) as f64,
            half_height: (height / 2) as f64,
        }
    }
}

impl WaveFunction for Interference {
    fn sample(&self, x: usize, y: usize, t: usize) -> f64 {
        let (x, y, t) = (x as f64, y as f64, t as f64);

        let theta = x.atan2(y);
        let rho_c = distance(x - self.half_width, y - self.half_height);
        let rho_l = distance(x + self.half_width, y - self.half_height);
        let _ = black_box((theta, rho_c));

        AMPLITUDE
            * (rho_l / 16.0 - t * PI / 12.0).sin()
            * (rho_l / 24.0 - t * PI / 10.0).sin()
            * (rho_l / 40.0 - t * PI / 8.0).sin()
    }
}

/// Concentric ripple centered on the frame.
///
/// `z = 10 * sin(rho/3 - t*PI/12) * sin(rho/8 - t*PI/8)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    half_width: f64,
    half_height: f64,
}

impl Ripple {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            half_width: (width / 2) as f64,
            half_height: (height / 2) as f64,
        }
    }
}

impl WaveFunction for Ripple {
    fn sample(&self, x: usize, y: usize, t: usize) -> f64 {
        let dx = x as f64 - self.half_width;
        let dy = y as f64 - self.half_height;
        let t = t as f64;

        let rho = distance(dx, dy);
        let _ = black_box(dx.atan2(dy));

        AMPLITUDE * (rho / 3.0 - t * PI / 12.0).sin() * (rho / 8.0 - t * PI / 8.0).sin()
    }
}

/// A built-in wave function bound to a frame geometry.
///
/// Wraps each implementation and delegates [`WaveFunction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveField {
    Interference(Interference),
    Ripple(Ripple),
}

impl WaveField {
    /// Builds the selected field for a `width x height` frame.
    pub fn new(kind: FieldKind, width: usize, height: usize) -> Self {
        match kind {
            FieldKind::Interference => WaveField::Interference(Interference::new(width, height)),
            FieldKind::Ripple => WaveField::Ripple(Ripple::new(width, height)),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            WaveField::Interference(_) => FieldKind::Interference,
            WaveField::Ripple(_) => FieldKind::Ripple,
        }
    }
}

impl WaveFunction for WaveField {
    fn sample(&self, x: usize, y: usize, t: usize) -> f64 {
        match self {
            WaveField::Interference(f) => f.sample(x, y, t),
            WaveField::Ripple(f) => f.sample(x, y, t),
        }
    }
}

fn distance(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}
