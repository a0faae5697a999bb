//! Dial configuration loaded from TOML or YAML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! standard 200-unit dial with a pound-sterling currency symbol.
//!
//! ```toml
//! size = 240.0
//! currency = "€"
//!
//! [palette]
//! accent = "#0ea5e9"
//! ```

use crate::error::{DialError, Result};
use crate::status::SemanticColor;
use glass_core::{Color, Easing};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one dial instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Side of the square footprint in logical units
    pub size: f32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// Currency symbol used verbatim in labels and sentiment copy
    pub currency: String,
    /// Font size of the curved store label
    pub label_font_size: f32,
    /// Font size of the centre amount
    pub center_font_size: f32,
    /// Ratio transition length in milliseconds
    pub ratio_duration_ms: u64,
    /// Opacity transition length in milliseconds
    pub opacity_duration_ms: u64,
    /// Easing curve for every transition
    pub easing: Easing,
    /// Colours as hex strings
    pub palette: Palette,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            stroke_width: 14.0,
            currency: "£".to_string(),
            label_font_size: 11.0,
            center_font_size: 28.0,
            ratio_duration_ms: 800,
            opacity_duration_ms: 400,
            easing: Easing::EaseInOut,
            palette: Palette::default(),
        }
    }
}

impl DialConfig {
    /// Parse from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::Toml`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`DialError::Yaml`] on malformed input.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Load from a `.toml`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown
    /// extension, or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("yaml" | "yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(DialError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::debug!(path = %path.display(), size = config.size, "loaded dial config");
        Ok(config)
    }

    /// Ratio transition length in seconds.
    #[must_use]
    pub fn ratio_duration(&self) -> f64 {
        millis_to_secs(self.ratio_duration_ms)
    }

    /// Opacity transition length in seconds.
    #[must_use]
    pub fn opacity_duration(&self) -> f64 {
        millis_to_secs(self.opacity_duration_ms)
    }
}

fn millis_to_secs(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

/// Dial colours as hex strings, as written in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Unfilled ring background
    pub track: String,
    /// Outer (planned) ring fill
    pub accent: String,
    /// Healthy spending
    pub success: String,
    /// Nearing the limit
    pub warning: String,
    /// Over budget, and every overflow arc
    pub danger: String,
    /// Centre amount and default store label
    pub text: String,
    /// Secondary copy and seam ticks
    pub muted_text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            track: "#e5e7eb".to_string(),
            accent: "#6366f1".to_string(),
            success: "#22c55e".to_string(),
            warning: "#f59e0b".to_string(),
            danger: "#ef4444".to_string(),
            text: "#111827".to_string(),
            muted_text: "#6b7280".to_string(),
        }
    }
}

impl Palette {
    /// Parse every entry into a [`Color`].
    ///
    /// # Errors
    ///
    /// Returns [`DialError::Color`] naming the first entry that fails.
    pub fn resolve(&self) -> Result<ResolvedPalette> {
        let parse = |field: &'static str, hex: &str| {
            Color::from_hex(hex).map_err(|source| DialError::Color { field, source })
        };
        Ok(ResolvedPalette {
            track: parse("track", &self.track)?,
            accent: parse("accent", &self.accent)?,
            success: parse("success", &self.success)?,
            warning: parse("warning", &self.warning)?,
            danger: parse("danger", &self.danger)?,
            text: parse("text", &self.text)?,
            muted_text: parse("muted_text", &self.muted_text)?,
        })
    }
}

/// Parsed palette ready for painting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPalette {
    /// Unfilled ring background
    pub track: Color,
    /// Outer (planned) ring fill
    pub accent: Color,
    /// Healthy spending
    pub success: Color,
    /// Nearing the limit
    pub warning: Color,
    /// Over budget, and every overflow arc
    pub danger: Color,
    /// Centre amount and default store label
    pub text: Color,
    /// Secondary copy and seam ticks
    pub muted_text: Color,
}

impl Default for ResolvedPalette {
    fn default() -> Self {
        Self {
            track: rgb8(0xe5, 0xe7, 0xeb),
            accent: rgb8(0x63, 0x66, 0xf1),
            success: rgb8(0x22, 0xc5, 0x5e),
            warning: rgb8(0xf5, 0x9e, 0x0b),
            danger: rgb8(0xef, 0x44, 0x44),
            text: rgb8(0x11, 0x18, 0x27),
            muted_text: rgb8(0x6b, 0x72, 0x80),
        }
    }
}

impl ResolvedPalette {
    /// Colour for a semantic status.
    #[must_use]
    pub const fn semantic(&self, color: SemanticColor) -> Color {
        match color {
            SemanticColor::Success => self.success,
            SemanticColor::Warning => self.warning,
            SemanticColor::Danger => self.danger,
        }
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
}
