//! Error types for the wave-field core.

use thiserror::Error;

/// Errors produced by renderer construction, rendering, and presentation.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width, height, or frame count was zero, or `width * height` overflowed.
    #[error("invalid dimensions: width, height and frame count must be non-zero")]
    InvalidDimensions,

    /// The swept extrema collapsed to a single value, so normalization would divide by zero.
    #[error("degenerate range: field minimum and maximum are both {value}")]
    DegenerateRange { value: f64 },

    /// A frame index outside `[0, frame_count)` was requested.
    #[error("frame {frame} out of range for animation of {frame_count} frames")]
    FrameOutOfRange { frame: usize, frame_count: usize },

    /// A channel name could not be parsed.
    #[error("invalid channel: {0}")]
    InvalidChannel(String),

    /// A field function name was not recognized.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A presentation sink failed to write its output.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FieldError {
    fn from(e: std::io::Error) -> Self {
        FieldError::Io(e.to_string())
    }
}
