//! Arc geometry for the two concentric rings.
//!
//! Arc-drawing primitives start at 3 o'clock. Every arc here is rotated by a
//! fixed [`ARC_ROTATION_DEGREES`] so fills start at 6 o'clock and run
//! clockwise, with a short seam tick marking the start point.
//!
//! A non-positive radius is a layout bug in the host, not a data error: it
//! yields zero-length arcs instead of failing.

use crate::config::ResolvedPalette;
use crate::status::RingState;
use glass_core::{Canvas, Color, LineCap, Point, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Visual separation between the two rings, and between the inner ring and
/// the curved label.
pub const RING_GAP: f32 = 4.0;

/// Rotation from the primitive's 3 o'clock start to 6 o'clock.
pub const ARC_ROTATION_DEGREES: f32 = 90.0;

/// Width of the seam tick.
pub const SEAM_WIDTH: f32 = 2.0;

/// Which of the two rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    /// Planned vs budget
    Outer,
    /// Spent vs budget
    Inner,
}

/// Radius and circumference of one ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    /// Stroke centre-line radius, never negative
    pub radius: f32,
    /// `2π·radius`
    pub circumference: f32,
}

impl RingGeometry {
    /// Geometry for a radius. Non-positive radii collapse to zero.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        let radius = if radius > 0.0 { radius } else { 0.0 };
        Self {
            radius,
            circumference: TAU * radius,
        }
    }

    /// Whether anything can be drawn on this ring.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}

/// One painted stroke along a ring, starting at the seam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcStroke {
    /// Ring radius
    pub radius: f32,
    /// Ring circumference
    pub circumference: f32,
    /// Painted length along the circumference, never negative
    pub dash_length: f32,
    /// Rotation applied to the primitive's native start
    pub rotation_degrees: f32,
    /// Clockwise sweep in degrees, `360·ratio`
    pub sweep_angle: f32,
    /// Stroke colour
    pub color: Color,
    /// Stroke width
    pub width: f32,
}

impl ArcStroke {
    /// Stroke covering `ratio` of the ring.
    #[must_use]
    pub fn new(ring: RingGeometry, ratio: f32, color: Color, width: f32) -> Self {
        // NaN and negative ratios paint nothing.
        let ratio = if ratio > 0.0 { ratio } else { 0.0 };
        Self {
            radius: ring.radius,
            circumference: ring.circumference,
            dash_length: ring.circumference * ratio,
            rotation_degrees: ARC_ROTATION_DEGREES,
            sweep_angle: 360.0 * ratio,
            color,
            width,
        }
    }

    /// Screen angle the stroke starts at (6 o'clock).
    #[must_use]
    pub const fn start_angle(&self) -> f32 {
        self.rotation_degrees
    }

    /// Whether the stroke paints anything.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.dash_length > 0.0 && !self.color.is_invisible()
    }

    fn paint(&self, canvas: &mut dyn Canvas, center: Point, opacity: f32) {
        let color = self.color.faded(opacity);
        if !self.is_visible() || color.is_invisible() {
            return;
        }
        canvas.stroke_arc(
            center,
            self.radius,
            self.start_angle(),
            self.sweep_angle,
            &StrokeStyle::new(color, self.width).with_cap(LineCap::Butt),
        );
    }
}

/// Separator tick across a ring at 6 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeamTick {
    /// Inner end
    pub from: Point,
    /// Outer end
    pub to: Point,
    /// Tick colour
    pub color: Color,
}

impl SeamTick {
    fn paint(&self, canvas: &mut dyn Canvas, opacity: f32) {
        let color = self.color.faded(opacity);
        if color.is_invisible() || self.from == self.to {
            return;
        }
        canvas.draw_line(self.from, self.to, &StrokeStyle::new(color, SEAM_WIDTH));
    }
}

/// Everything drawn for one ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingDrawing {
    /// Full-circle background
    pub track: ArcStroke,
    /// Base fill up to the budget
    pub fill: ArcStroke,
    /// Danger-coloured continuation past the seam, when over budget
    pub overflow: Option<ArcStroke>,
    /// Seam marker
    pub seam: SeamTick,
}

impl RingDrawing {
    /// Paint the ring. The track is always opaque; everything else is
    /// multiplied by `opacity`.
    pub fn paint(&self, canvas: &mut dyn Canvas, center: Point, opacity: f32) {
        self.track.paint(canvas, center, 1.0);
        self.fill.paint(canvas, center, opacity);
        if let Some(overflow) = &self.overflow {
            overflow.paint(canvas, center, opacity);
        }
        self.seam.paint(canvas, opacity);
    }
}

/// Drawings for both rings around a shared centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialLayout {
    /// Dial centre
    pub center: Point,
    /// Planned ring
    pub outer: RingDrawing,
    /// Spent ring
    pub inner: RingDrawing,
}

/// Radii derived from the dial's size and stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialGeometry {
    /// Side of the square footprint
    pub size: f32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// `(size/2, size/2)`
    pub center: Point,
    /// `(size − stroke_width)/2`
    pub outer_radius: f32,
    /// `outer_radius − stroke_width − RING_GAP`
    pub inner_radius: f32,
}

impl DialGeometry {
    /// Derive the ring radii for a square dial.
    #[must_use]
    pub fn new(size: f32, stroke_width: f32) -> Self {
        let half = size / 2.0;
        let outer_radius = (size - stroke_width) / 2.0;
        Self {
            size,
            stroke_width,
            center: Point::new(half, half),
            outer_radius,
            inner_radius: outer_radius - stroke_width - RING_GAP,
        }
    }

    /// Same geometry with the footprint's top-left corner at `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        let half = self.size / 2.0;
        self.center = Point::new(origin.x + half, origin.y + half);
        self
    }

    /// Whether `point` falls on the dial's disc, out to the outer edge of the
    /// outer ring's stroke.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.distance(&self.center) <= self.outer_radius + self.stroke_width / 2.0
    }

    /// Geometry of one ring.
    #[must_use]
    pub fn ring(&self, ring: Ring) -> RingGeometry {
        match ring {
            Ring::Outer => RingGeometry::new(self.outer_radius),
            Ring::Inner => RingGeometry::new(self.inner_radius),
        }
    }

    /// Radius of the curved label, inside the inner ring.
    #[must_use]
    pub fn text_radius(&self) -> f32 {
        self.inner_radius - self.stroke_width - RING_GAP
    }

    /// Seam tick across `ring` at 6 o'clock.
    #[must_use]
    pub fn seam_tick(&self, ring: Ring, color: Color) -> SeamTick {
        let geometry = self.ring(ring);
        let half_stroke = self.stroke_width / 2.0;
        let (from, to) = if geometry.is_degenerate() {
            (self.center, self.center)
        } else {
            (
                Point::on_circle(self.center, geometry.radius - half_stroke, ARC_ROTATION_DEGREES),
                Point::on_circle(self.center, geometry.radius + half_stroke, ARC_ROTATION_DEGREES),
            )
        };
        SeamTick { from, to, color }
    }

    /// Strokes for one ring in `state`, filled with `fill_color`.
    ///
    /// The overflow arc always uses the palette's danger colour.
    #[must_use]
    pub fn ring_drawing(
        &self,
        ring: Ring,
        state: &RingState,
        fill_color: Color,
        palette: &ResolvedPalette,
    ) -> RingDrawing {
        let geometry = self.ring(ring);
        let stroke = |ratio: f64, color| {
            ArcStroke::new(geometry, ratio as f32, color, self.stroke_width)
        };
        RingDrawing {
            track: stroke(1.0, palette.track),
            fill: stroke(state.fill_ratio, fill_color),
            overflow: state
                .is_over_budget()
                .then(|| stroke(state.overflow_ratio, palette.danger)),
            seam: self.seam_tick(ring, palette.muted_text),
        }
    }

    /// Strokes for both rings. The outer ring is a reference line painted in
    /// the accent colour; the inner ring uses its status colour.
    #[must_use]
    pub fn layout(
        &self,
        outer: &RingState,
        inner: &RingState,
        palette: &ResolvedPalette,
    ) -> DialLayout {
        DialLayout {
            center: self.center,
            outer: self.ring_drawing(Ring::Outer, outer, palette.accent, palette),
            inner: self.ring_drawing(Ring::Inner, inner, palette.semantic(inner.color), palette),
        }
    }
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self::new(200.0, 14.0)
    }
}
