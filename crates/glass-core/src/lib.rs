//! Core types and traits for the Glass design system.
//!
//! This crate provides foundational types used by Glass widgets:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`Key`], [`MouseButton`]
//! - Animation: [`Easing`], [`Tween`], [`FrameClock`]
//! - Rendering: [`DrawCommand`], [`Canvas`], [`RecordingCanvas`], [`SvgRenderer`]

pub mod animation;
pub mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod svg;
pub mod widget;

pub use animation::{Easing, FrameClock, Tween};
pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, LineCap, StrokeStyle};
pub use event::{Event, Key, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use svg::SvgRenderer;
pub use widget::{AccessibleRole, FontWeight, LayoutResult, TextAnchor, TextStyle, Widget};
