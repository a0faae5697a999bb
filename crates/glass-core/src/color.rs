//! Color representation and hex parsing.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Same color with a replaced alpha channel.
    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// Same color with its alpha multiplied by `opacity`.
    #[must_use]
    pub fn faded(&self, opacity: f32) -> Self {
        self.with_alpha(self.a * opacity)
    }

    /// Whether the color is fully transparent.
    #[must_use]
    pub fn is_invisible(&self) -> bool {
        self.a <= 0.0
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));

        let c2 = Color::from_hex("00ff00").unwrap();
        assert_eq!(c2.g, 1.0);
    }

    #[test]
    fn test_color_from_hex_with_alpha() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("#ff00£"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_color_faded() {
        let c = Color::new(0.2, 0.4, 0.6, 0.5);
        let faded = c.faded(0.5);
        assert!((faded.a - 0.25).abs() < 1e-6);
        assert_eq!(faded.r, c.r);
        assert!(c.faded(0.0).is_invisible());
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidHex.to_string(),
            "invalid hex characters"
        );
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
    }

    proptest! {
        #[test]
        fn prop_hex_roundtrip_close(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let parsed = Color::from_hex(&hex).unwrap();
            prop_assert_eq!(parsed.to_hex(), hex);
        }

        #[test]
        fn prop_faded_alpha_in_range(a in 0.0f32..=1.0, opacity in -1.0f32..2.0) {
            let c = Color::new(0.5, 0.5, 0.5, a).faded(opacity);
            prop_assert!((0.0..=1.0).contains(&c.a));
        }
    }
}
