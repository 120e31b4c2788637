//! HSV pixel type and conversion to 8-bit RGB.
//!
//! Pixels follow the common 8-bit HSV convention used by video tooling:
//! hue is stored in `[0, 180)` (two degrees per step) so it fits a byte,
//! while saturation and value span the full `[0, 255]`.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Largest representable hue plus one (180 steps of two degrees).
pub const HUE_RANGE: u8 = 180;

/// An 8-bit HSV pixel.
///
/// Serializes as a `[h, s, v]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Reads one channel.
    pub fn get(self, channel: Channel) -> u8 {
        match channel {
            Channel::Hue => self.h,
            Channel::Saturation => self.s,
            Channel::Value => self.v,
        }
    }

    /// Mutable access to one channel.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Hue => &mut self.h,
            Channel::Saturation => &mut self.s,
            Channel::Value => &mut self.v,
        }
    }
}

impl From<[u8; 3]> for Hsv {
    fn from([h, s, v]: [u8; 3]) -> Self {
        Self { h, s, v }
    }
}

impl From<Hsv> for [u8; 3] {
    fn from(c: Hsv) -> Self {
        [c.h, c.s, c.v]
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One of the three HSV channels, used to pick where field intensity is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Hue,
    #[default]
    Saturation,
    Value,
}

const CHANNEL_NAMES: &[&str] = &["hue", "saturation", "value"];

impl Channel {
    /// Parses a channel by name (`"hue"`, `"saturation"`, `"value"`, or the
    /// single letters `h`, `s`, `v`).
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name.to_ascii_lowercase().as_str() {
            "hue" | "h" => Ok(Channel::Hue),
            "saturation" | "s" => Ok(Channel::Saturation),
            "value" | "v" => Ok(Channel::Value),
            _ => Err(FieldError::InvalidChannel(name.to_string())),
        }
    }

    /// Canonical channel names.
    pub fn list_names() -> &'static [&'static str] {
        CHANNEL_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Value => "value",
        }
    }
}

/// Converts an 8-bit HSV pixel to 8-bit RGB.
///
/// Hue wraps at 360 degrees, so bytes above [`HUE_RANGE`] alias back onto the
/// start of the wheel. Components are rounded to the nearest byte.
pub fn hsv_to_rgb(c: Hsv) -> Rgb8 {
    let s = c.s as f64 / 255.0;
    let v = c.v as f64 / 255.0;
    let degrees = c.h as f64 * 2.0;

    let sector = (degrees / 60.0).rem_euclid(6.0);
    let i = sector.floor();
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb8 {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
}

fn to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
