//! Draw commands.
//!
//! All rendering reduces to these primitives. Angles are in degrees using
//! the screen convention described in [`crate::geometry`].

use crate::widget::TextStyle;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Stroke style for path rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl StrokeStyle {
    /// Solid stroke with butt caps.
    #[must_use]
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    /// Set the line cap.
    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Stroke part of a circle, clockwise from `start_angle`
    Arc {
        /// Center point
        center: Point,
        /// Radius of the stroke's centerline
        radius: f32,
        /// Start angle in degrees
        start_angle: f32,
        /// Clockwise sweep in degrees
        sweep_angle: f32,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw a path (polyline or polygon)
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Rotation about `position` in degrees
        rotation: f32,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a line between two points.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            style,
        }
    }

    /// Whether the command would paint nothing visible.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Arc {
                radius,
                sweep_angle,
                style,
                ..
            } => *radius <= 0.0 || *sweep_angle <= 0.0 || style.color.is_invisible(),
            Self::Path { points, style, .. } => points.len() < 2 || style.color.is_invisible(),
            Self::Text { content, style, .. } => content.is_empty() || style.color.is_invisible(),
        }
    }
}
