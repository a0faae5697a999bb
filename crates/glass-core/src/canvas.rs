//! Canvas trait and a recording implementation.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::TextStyle;
use crate::Point;

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Stroke an arc clockwise from `start_angle` through `sweep_angle` degrees.
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        stroke: &StrokeStyle,
    );

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle);

    /// Draw text rotated by `rotation` degrees about `position`.
    fn draw_text(&mut self, text: &str, position: Point, rotation: f32, style: &TextStyle);
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to another renderer, e.g. SVG)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded text runs, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        stroke: &StrokeStyle,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
            style: stroke.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle) {
        self.commands
            .push(DrawCommand::line(from, to, stroke.clone()));
    }

    fn draw_text(&mut self, text: &str, position: Point, rotation: f32, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            rotation,
            style: style.clone(),
        });
    }
}
