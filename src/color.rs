//! # Display Colors
//!
//! Converts catalog hex colors (`#RRGGBB`) into the RGBA values chart
//! renderers consume. Parsing failures surface as
//! [`DashboardError::InvalidColorFormat`]; chart and panel builders swap in
//! [`Rgba::FALLBACK`] so a single bad catalog entry never blanks a chart.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::constants::display::{FALLBACK_ALPHA, FALLBACK_RGB};
use crate::error::{DashboardError, Result};

/// A color with 8-bit channels and a fractional alpha.
///
/// Displays and serializes as `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Neutral gray for buckets without a usable color
    pub const FALLBACK: Rgba = Rgba {
        r: FALLBACK_RGB.0,
        g: FALLBACK_RGB.1,
        b: FALLBACK_RGB.2,
        a: FALLBACK_ALPHA,
    };

    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: normalize_alpha(a),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Parse a `#RRGGBB` (or `RRGGBB`) string into an [`Rgba`] with the given alpha.
///
/// Hex digits are case-insensitive. Anything other than exactly six hex
/// digits after an optional leading `#` is rejected. Alpha is clamped to
/// `[0, 1]`, NaN becomes `1`.
///
/// ```rust
/// use taskboard_core::color::to_display_color;
///
/// let color = to_display_color("#FF4444", 1.0).unwrap();
/// assert_eq!(color.to_string(), "rgba(255,68,68,1)");
/// assert_eq!(to_display_color("FF4444", 1.0).unwrap(), color);
/// assert!(to_display_color("ZZZZZZ", 1.0).is_err());
/// ```
pub fn to_display_color(hex: &str, alpha: f64) -> Result<Rgba> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DashboardError::invalid_color(hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| DashboardError::invalid_color(hex))
    };

    Ok(Rgba::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
}

/// [`to_display_color`] with the neutral fallback substituted on failure.
pub fn to_display_color_or_fallback(hex: &str, alpha: f64) -> Rgba {
    match to_display_color(hex, alpha) {
        Ok(color) => color,
        Err(error) => {
            tracing::warn!(color = %hex, error = %error, "Using fallback display color");
            Rgba::FALLBACK
        }
    }
}

fn normalize_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}
