//! Per-character layout of text curved along the bottom of a circle.
//!
//! Glyph widths are approximated from the font size, so no text measurement
//! is needed. The string is centred on 6 o'clock and reads left to right.

use glass_core::{Canvas, Point, TextAnchor, TextStyle};
use serde::{Deserialize, Serialize};

/// Average glyph advance relative to font size.
pub const GLYPH_WIDTH_FACTOR: f32 = 0.74;

/// Screen angle the text is centred on (6 o'clock).
const TEXT_CENTER_DEGREES: f32 = 90.0;

/// Placement of one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    /// The character, as a string for drawing
    pub glyph: String,
    /// Anchor position (glyph centre)
    pub position: Point,
    /// Rotation in degrees about `position` that keeps the glyph upright
    /// against the circle's tangent
    pub rotation: f32,
    /// Screen angle of the glyph on the circle
    pub angle: f32,
}

/// Angular advance per character in degrees.
///
/// Returns zero for a non-positive radius.
#[must_use]
pub fn char_angular_width(font_size: f32, radius: f32) -> f32 {
    if radius > 0.0 {
        (font_size * GLYPH_WIDTH_FACTOR / radius).to_degrees()
    } else {
        0.0
    }
}

/// Lay out `text` along a circle of `radius` around `center`.
///
/// Character `i` of `n` sits at `90° + (n−1)·w/2 − i·w`, where `w` is
/// [`char_angular_width`], and is rotated by `angle − 90°`. Empty text and
/// non-positive radii produce no glyphs.
#[must_use]
pub fn layout_curved_text(
    text: &str,
    center: Point,
    radius: f32,
    font_size: f32,
) -> Vec<GlyphPlacement> {
    if radius <= 0.0 {
        return Vec::new();
    }
    let step = char_angular_width(font_size, radius);
    let count = text.chars().count();
    let first = TEXT_CENTER_DEGREES + count.saturating_sub(1) as f32 * step / 2.0;

    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let angle = (i as f32).mul_add(-step, first);
            GlyphPlacement {
                glyph: ch.to_string(),
                position: Point::on_circle(center, radius, angle),
                rotation: angle - TEXT_CENTER_DEGREES,
                angle,
            }
        })
        .collect()
}

/// Draw laid-out glyphs, each centred on its anchor.
pub fn paint_glyphs(canvas: &mut dyn Canvas, glyphs: &[GlyphPlacement], style: &TextStyle) {
    let style = TextStyle {
        anchor: TextAnchor::Middle,
        ..style.clone()
    };
    for glyph in glyphs.iter().filter(|g| !g.glyph.trim().is_empty()) {
        canvas.draw_text(&glyph.glyph, glyph.position, glyph.rotation, &style);
    }
}
