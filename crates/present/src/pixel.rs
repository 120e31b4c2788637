//! Pure-computation pixel buffer conversion from an HSV [`FrameBuffer`].
//!
//! Always available (no feature gate) so that the PNG path and any other
//! RGBA consumer share the same conversion.

use wave_field_core::color::hsv_to_rgb;
use wave_field_core::frame::FrameBuffer;

/// Converts every pixel to RGB and packs the frame as RGBA8.
///
/// The buffer length is `width * height * 4`; alpha is always 255.
pub fn frame_to_rgba(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .pixels()
        .iter()
        .flat_map(|&px| {
            let rgb = hsv_to_rgb(px);
            [rgb.r, rgb.g, rgb.b, 255u8]
        })
        .collect()
}
