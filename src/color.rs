//! RGBA color value and blending.
//!
//! Channels are `f64` in the nominal `[0, 1]` range. Nothing here clamps on
//! construction or blending; only [`Color::to_hex`] clamps, because an
//! 8-bit hex string cannot represent out-of-range channels.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Digit count (after any leading `#`) is not 3, 6 or 8.
    #[error("invalid hex color length: {0} digits")]
    InvalidLength(usize),
    /// The input contains a character that is not a hex digit.
    #[error("invalid hex color: {0:?}")]
    InvalidDigit(String),
}

/// An RGBA color with normalized channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Linear blend toward `other`; see [`mix_colors`].
    #[must_use]
    pub fn mix(self, other: Self, alpha: f64) -> Self {
        mix_colors(self, other, alpha)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional and
    /// digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidDigit`] for non-hex characters and
    /// [`ColorError::InvalidLength`] for any other digit count.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            debug!(input, "rejected hex color with non-hex digit");
            return Err(ColorError::InvalidDigit(input.to_owned()));
        }

        let bytes: Vec<u8> = match digits.len() {
            3 => digits.bytes().map(|d| nibble(d) * 17).collect(),
            6 | 8 => digits
                .as_bytes()
                .chunks(2)
                .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
                .collect(),
            len => {
                debug!(input, len, "rejected hex color with bad length");
                return Err(ColorError::InvalidLength(len));
            }
        };

        let alpha = bytes.get(3).copied().unwrap_or(u8::MAX);
        Ok(Self::rgba(unit(bytes[0]), unit(bytes[1]), unit(bytes[2]), unit(alpha)))
    }

    /// Format as `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    ///
    /// Channels are clamped to `[0, 1]` and rounded to the nearest 8-bit step.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(byte);
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Blend `c1` toward `c2` channel by channel:
/// `c1 * (1 - alpha) + c2 * alpha`.
///
/// `alpha` is not clamped, so values outside `[0, 1]` extrapolate.
#[must_use]
pub fn mix_colors(c1: Color, c2: Color, alpha: f64) -> Color {
    let lerp = |x: f64, y: f64| x * (1.0 - alpha) + y * alpha;
    Color {
        r: lerp(c1.r, c2.r),
        g: lerp(c1.g, c2.g),
        b: lerp(c1.b, c2.b),
        a: lerp(c1.a, c2.a),
    }
}

// Caller has already checked `d` is an ASCII hex digit.
fn nibble(d: u8) -> u8 {
    match d {
        b'0'..=b'9' => d - b'0',
        b'a'..=b'f' => d - b'a' + 10,
        _ => d.to_ascii_uppercase() - b'A' + 10,
    }
}

fn unit(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
