//! PNG output of rendered frames.
//!
//! Feature-gated behind `png` (default on) so that consumers who only need
//! the terminal or RGBA paths do not pull in the `image` crate.

use std::fs;
use std::path::{Path, PathBuf};

use wave_field_core::error::FieldError;
use wave_field_core::frame::FrameBuffer;
use wave_field_core::sink::FrameConsumer;

use crate::pixel::frame_to_rgba;

/// Writes a frame as an RGBA PNG image.
///
/// Returns `FieldError::InvalidDimensions` if the frame dimensions overflow
/// `u32`, or `FieldError::Io` on write failure.
pub fn write_png(frame: &FrameBuffer, path: &Path) -> Result<(), FieldError> {
    let rgba = frame_to_rgba(frame);
    let w = u32::try_from(frame.width()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(frame.height()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}

/// Sink that writes each accepted frame to `<dir>/<prefix>_NNNN.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: usize,
}

impl PngSequenceSink {
    /// Creates `dir` (and parents) if needed. Files are named `frame_0000.png`, ...
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, FieldError> {
        Self::with_prefix(dir, "frame")
    }

    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: &str) -> Result<Self, FieldError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: prefix.to_owned(),
            written: 0,
        })
    }

    /// Number of frames written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Path the next accepted frame will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}_{:04}.png", self.prefix, self.written))
    }
}

impl FrameConsumer for PngSequenceSink {
    fn accept(&mut self, frame: &FrameBuffer) -> Result<(), FieldError> {
        let path = self.next_path();
        write_png(frame, &path)?;
        tracing::debug!(path = %path.display(), "wrote frame");
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wave_field_core::color::Hsv;
    use wave_field_core::config::{RenderConfig, DEFAULT_BASE};
    use wave_field_core::renderer::WaveFieldRenderer;

    #[test]
    fn write_png_round_trip() {
        let frame = FrameBuffer::filled(16, 12, Hsv::new(120, 255, 255)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&frame, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 12);
        assert_eq!(img.get_pixel(3, 4).0, [0, 0, 255, 255]);
    }

    #[test]
    fn write_png_into_missing_directory_is_io_error() {
        let frame = FrameBuffer::filled(2, 2, Hsv::new(0, 0, 0)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        assert!(matches!(write_png(&frame, &path), Err(FieldError::Io(_))));
    }

    #[test]
    fn sequence_sink_numbers_files_per_frame() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("frames");
        let mut sink = PngSequenceSink::new(&out).unwrap();

        let mut renderer =
            WaveFieldRenderer::configure(RenderConfig::new(12, 8, 3, DEFAULT_BASE)).unwrap();
        renderer.run_animation(Duration::ZERO, &mut sink).unwrap();

        assert_eq!(sink.written(), 3);
        for i in 0..3 {
            let path = out.join(format!("frame_{i:04}.png"));
            let img = image::open(&path).unwrap();
            assert_eq!((img.width(), img.height()), (12, 8));
        }
        assert!(!out.join("frame_0003.png").exists());
    }

    #[test]
    fn sequence_sink_uses_custom_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let sink = PngSequenceSink::with_prefix(dir.path(), "wave").unwrap();
        assert_eq!(sink.next_path(), dir.path().join("wave_0000.png"));
    }
}
