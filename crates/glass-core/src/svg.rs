//! SVG renderer - turns recorded `DrawCommand`s into an SVG document.
//!
//! Arcs are written as dashed circles rotated to their start angle. An SVG
//! circle's stroke begins at 3 o'clock and runs clockwise on screen, so the
//! dash length is the painted portion of the circumference.

use crate::draw::{DrawCommand, LineCap, StrokeStyle};
use crate::widget::{TextAnchor, TextStyle};
use crate::{Color, Point, Size};
use std::f32::consts::PI;
use std::fmt::Write;

const FONT_FAMILY: &str = "system-ui, sans-serif";

/// Renderer that writes draw commands as SVG markup.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: Size,
    background: Option<Color>,
}

impl SvgRenderer {
    /// Create a renderer for a viewport of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
        }
    }

    /// Paint a solid background behind all commands.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Render a list of draw commands into a complete SVG document.
    #[must_use]
    pub fn render(&self, commands: &[DrawCommand]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.size.width),
            h = fmt_num(self.size.height),
        );
        if let Some(bg) = self.background {
            let _ = writeln!(
                out,
                r#"  <rect width="100%" height="100%" {}/>"#,
                paint_attrs("fill", bg)
            );
        }
        for cmd in commands.iter().filter(|cmd| !cmd.is_noop()) {
            Self::render_command(&mut out, cmd);
        }
        out.push_str("</svg>\n");
        out
    }

    fn render_command(out: &mut String, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
                style,
            } => Self::write_arc(out, *center, *radius, *start_angle, *sweep_angle, style),
            DrawCommand::Path {
                points,
                closed,
                style,
            } => Self::write_path(out, points, *closed, style),
            DrawCommand::Text {
                content,
                position,
                rotation,
                style,
            } => Self::write_text(out, content, *position, *rotation, style),
        }
    }

    fn write_arc(
        out: &mut String,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        style: &StrokeStyle,
    ) {
        let circumference = 2.0 * PI * radius;
        let dash = circumference * (sweep_angle / 360.0).clamp(0.0, 1.0);
        let _ = writeln!(
            out,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="none" {stroke} stroke-dasharray="{dash} {circ}" transform="rotate({rot} {cx} {cy})"/>"#,
            cx = fmt_num(center.x),
            cy = fmt_num(center.y),
            r = fmt_num(radius),
            stroke = stroke_attrs(style),
            dash = fmt_num(dash),
            circ = fmt_num(circumference),
            rot = fmt_num(start_angle),
        );
    }

    fn write_path(out: &mut String, points: &[Point], closed: bool, style: &StrokeStyle) {
        let coords = points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        let element = if closed { "polygon" } else { "polyline" };
        let _ = writeln!(
            out,
            r#"  <{element} points="{coords}" fill="none" {}/>"#,
            stroke_attrs(style)
        );
    }

    fn write_text(
        out: &mut String,
        content: &str,
        position: Point,
        rotation: f32,
        style: &TextStyle,
    ) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let transform = if rotation == 0.0 {
            String::new()
        } else {
            format!(
                r#" transform="rotate({} {} {})""#,
                fmt_num(rotation),
                fmt_num(position.x),
                fmt_num(position.y)
            )
        };
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{anchor}" dominant-baseline="central" {}{transform}>{}</text>"#,
            fmt_num(position.x),
            fmt_num(position.y),
            FONT_FAMILY,
            fmt_num(style.size),
            style.weight.css_weight(),
            paint_attrs("fill", style.color),
            escape_xml(content),
        );
    }
}

/// `name="#rrggbb"` plus an opacity attribute when the color is translucent.
fn paint_attrs(name: &str, color: Color) -> String {
    if color.a >= 1.0 {
        format!(r#"{name}="{}""#, color.to_hex())
    } else {
        format!(
            r#"{name}="{}" {name}-opacity="{}""#,
            color.to_hex(),
            fmt_num(color.a)
        )
    }
}

fn stroke_attrs(style: &StrokeStyle) -> String {
    let cap = match style.cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    };
    format!(
        r#"{} stroke-width="{}" stroke-linecap="{cap}""#,
        paint_attrs("stroke", style.color),
        fmt_num(style.width)
    )
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn fmt_num(value: f32) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
