#![deny(unsafe_code)]
//! Core types for the wave-field renderer.
//!
//! Provides the `WaveFunction` trait and built-in fields, the exhaustive
//! `Extrema` sweep, the HSV `FrameBuffer`, `RenderConfig`, the
//! `WaveFieldRenderer` itself, and the `FrameConsumer` presentation seam.

pub mod color;
pub mod config;
pub mod error;
pub mod extrema;
pub mod field;
pub mod frame;
pub mod params;
pub mod renderer;
pub mod sink;

pub use color::{hsv_to_rgb, Channel, Hsv, Rgb8};
pub use config::RenderConfig;
pub use error::FieldError;
pub use extrema::Extrema;
pub use field::{FieldKind, WaveField, WaveFunction};
pub use frame::FrameBuffer;
pub use renderer::{RenderStats, WaveFieldRenderer};
pub use sink::FrameConsumer;
