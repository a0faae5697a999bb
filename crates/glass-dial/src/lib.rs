//! Dual-ring budget dial for grocery lists.
//!
//! The dial is split into three stages that data flows through in order:
//!
//! - [`status`]: pure ratio, threshold and sentiment calculation from a
//!   [`BudgetSnapshot`]
//! - [`arc`] and [`curved_text`]: stroke geometry for the two rings and the
//!   curved store label
//! - [`animator`]: per-frame interpolation of ratios and opacities
//!
//! [`BudgetDial`] ties them together as a widget.
//!
//! # Examples
//!
//! ```
//! use glass_dial::{BudgetSnapshot, DialReadout, Mode, SemanticColor};
//!
//! let snapshot = BudgetSnapshot::new(50.0, 45.0, 42.0, Mode::Shopping);
//! let readout = DialReadout::compute(&snapshot, "£");
//!
//! assert!((readout.inner.fill_ratio - 0.84).abs() < 1e-9);
//! assert_eq!(readout.inner.color, SemanticColor::Warning);
//! ```

pub mod animator;
pub mod arc;
pub mod config;
pub mod curved_text;
mod dial;
mod error;
mod snapshot;
pub mod status;

pub use animator::{AnimatedFrame, DialAnimator, FrameCallback, ModeOpacity, RingFrame, RingTargets};
pub use arc::{
    ArcStroke, DialGeometry, DialLayout, Ring, RingDrawing, RingGeometry, SeamTick, RING_GAP,
};
pub use config::{DialConfig, Palette, ResolvedPalette};
pub use curved_text::{layout_curved_text, GlyphPlacement, GLYPH_WIDTH_FACTOR};
pub use dial::{BudgetDial, BudgetEditRequested, SET_BUDGET_PROMPT};
pub use error::{DialError, Result};
pub use snapshot::{BudgetSnapshot, Mode};
pub use status::{
    fill_ratio, format_amount, overflow_ratio, sentiment, status_color, DialReadout, RingState,
    SemanticColor, Sentiment,
};
