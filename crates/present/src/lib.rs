#![deny(unsafe_code)]
//! Presentation sinks for the wave-field renderer.
//!
//! The renderer hands out HSV frames; everything here converts them to RGB
//! and puts them somewhere: an RGBA byte buffer, PNG files, or a truecolor
//! terminal driven through `crossterm`.

pub mod pixel;
pub mod terminal;

#[cfg(feature = "png")]
pub mod snapshot;

pub use terminal::TerminalSink;

#[cfg(feature = "png")]
pub use snapshot::{write_png, PngSequenceSink};
