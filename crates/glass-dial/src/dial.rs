//! Budget dial widget: two concentric rings with a centre amount.

use crate::animator::{AnimatedFrame, DialAnimator, RingFrame, RingTargets};
use crate::arc::{DialGeometry, DialLayout};
use crate::config::{DialConfig, ResolvedPalette};
use crate::curved_text::{layout_curved_text, paint_glyphs};
use crate::error::Result;
use crate::snapshot::BudgetSnapshot;
use crate::status::{format_amount, DialReadout, RingState, Sentiment};
use glass_core::{
    AccessibleRole, Canvas, Color, Constraints, Event, FontWeight, LayoutResult, MouseButton,
    Point, Rect, Size, TextAnchor, TextStyle, TouchId, Widget,
};
use std::any::Any;

/// Copy shown under the amount when no budget is set.
pub const SET_BUDGET_PROMPT: &str = "Tap to set budget";

/// Message emitted when the dial is pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetEditRequested {
    /// Budget at the time of the press
    pub budget: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Mouse,
    Touch(TouchId),
}

/// Dual-ring budget dial.
///
/// The outer ring shows planned against budget, the inner ring spent against
/// budget. Values animate between snapshots; call [`BudgetDial::tick`] from
/// the host's frame callback.
pub struct BudgetDial {
    config: DialConfig,
    palette: ResolvedPalette,
    geometry: DialGeometry,
    snapshot: BudgetSnapshot,
    readout: DialReadout,
    animator: DialAnimator,
    store_name: Option<String>,
    store_color: Option<Color>,
    on_edit: Option<Box<dyn FnMut() + Send>>,
    pressed: Option<Press>,
    focused: bool,
    label: String,
    test_id_value: Option<String>,
    bounds: Rect,
}

impl BudgetDial {
    /// Create an unmounted dial with the default configuration.
    #[must_use]
    pub fn new(snapshot: BudgetSnapshot) -> Self {
        Self::with_palette(DialConfig::default(), ResolvedPalette::default(), snapshot)
    }

    /// Create an unmounted dial from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a palette entry is not a valid hex colour.
    pub fn from_config(config: DialConfig, snapshot: BudgetSnapshot) -> Result<Self> {
        let palette = config.palette.resolve()?;
        Ok(Self::with_palette(config, palette, snapshot))
    }

    fn with_palette(config: DialConfig, palette: ResolvedPalette, snapshot: BudgetSnapshot) -> Self {
        let readout = DialReadout::compute(&snapshot, &config.currency);
        let geometry = DialGeometry::new(config.size, config.stroke_width);
        let mut dial = Self {
            animator: DialAnimator::from_config(&config),
            bounds: Rect::from_size(Size::square(config.size)),
            config,
            palette,
            geometry,
            snapshot,
            readout,
            store_name: None,
            store_color: None,
            on_edit: None,
            pressed: None,
            focused: false,
            label: String::new(),
            test_id_value: None,
        };
        dial.refresh_label();
        dial
    }

    /// Show a store name curved along the bottom of the dial.
    #[must_use]
    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    /// Colour for the store name. Defaults to the palette's text colour.
    #[must_use]
    pub fn store_color(mut self, color: Color) -> Self {
        self.store_color = Some(color);
        self
    }

    /// Callback invoked when the dial is pressed to edit the budget.
    #[must_use]
    pub fn on_edit(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_edit = Some(Box::new(callback));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Start animating toward the current snapshot.
    pub fn mount(&mut self) {
        self.animator.mount(&self.targets());
    }

    /// Release in-flight animations, frame listeners and press state.
    pub fn unmount(&mut self) {
        self.animator.unmount();
        self.pressed = None;
        self.focused = false;
    }

    /// Whether the dial is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.animator.is_mounted()
    }

    /// Replace the input snapshot. The newest snapshot always wins over any
    /// transition still in flight.
    pub fn set_snapshot(&mut self, snapshot: BudgetSnapshot) {
        if snapshot == self.snapshot {
            return;
        }
        self.snapshot = snapshot;
        self.readout = DialReadout::compute(&snapshot, &self.config.currency);
        self.refresh_label();
        self.animator.retarget(&self.targets());
    }

    /// Advance animations by `dt` seconds. Returns `None` while unmounted.
    pub fn tick(&mut self, dt: f64) -> Option<AnimatedFrame> {
        self.animator.tick(dt)
    }

    /// Register a listener for animation frames.
    pub fn on_frame(&mut self, callback: impl FnMut(&AnimatedFrame) + Send + 'static) {
        self.animator.on_frame(callback);
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Current input snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &BudgetSnapshot {
        &self.snapshot
    }

    /// Settled ring states and sentiment for the current snapshot.
    #[must_use]
    pub const fn readout(&self) -> &DialReadout {
        &self.readout
    }

    /// Sentiment for the current snapshot, if a budget is set.
    #[must_use]
    pub fn sentiment(&self) -> Option<&Sentiment> {
        self.readout.sentiment.as_ref()
    }

    /// Current animated values.
    #[must_use]
    pub fn frame(&self) -> AnimatedFrame {
        self.animator.frame()
    }

    /// Resolved palette in use.
    #[must_use]
    pub const fn palette(&self) -> &ResolvedPalette {
        &self.palette
    }

    /// Ring strokes for the current animated frame. Status colours are taken
    /// from the animated ratios, not the settled readout.
    #[must_use]
    pub fn ring_layout(&self) -> DialLayout {
        let frame = self.animator.frame();
        let animated =
            |ring: RingFrame| RingState::from_ratios(ring.fill_ratio, ring.overflow_ratio);
        self.geometry
            .layout(&animated(frame.outer), &animated(frame.inner), &self.palette)
    }

    /// Large centre amount: planned while planning, spent afterwards.
    #[must_use]
    pub fn primary_label(&self) -> String {
        format_amount(&self.config.currency, self.snapshot.headline_value())
    }

    /// Small line under the amount.
    #[must_use]
    pub fn secondary_label(&self) -> String {
        if self.snapshot.has_budget() {
            format!("of {}", format_amount(&self.config.currency, self.snapshot.budget))
        } else {
            SET_BUDGET_PROMPT.to_string()
        }
    }

    fn targets(&self) -> RingTargets {
        RingTargets::from_readout(&self.readout, self.snapshot.mode)
    }

    fn refresh_label(&mut self) {
        self.label = format!("Budget: {} {}", self.primary_label(), self.secondary_label());
    }

    fn request_edit(&mut self) -> Option<Box<dyn Any + Send>> {
        tracing::debug!(budget = self.snapshot.budget, "budget edit requested");
        if let Some(callback) = self.on_edit.as_mut() {
            callback();
        }
        Some(Box::new(BudgetEditRequested {
            budget: self.snapshot.budget,
        }))
    }

    fn paint_center(&self, canvas: &mut dyn Canvas, center: Point) {
        let amount_size = self.config.center_font_size;
        let caption_size = self.config.label_font_size;

        let amount = TextStyle {
            size: amount_size,
            color: self.palette.text,
            weight: FontWeight::Bold,
            anchor: TextAnchor::Middle,
        };
        canvas.draw_text(
            &self.primary_label(),
            Point::new(center.x, center.y - caption_size / 2.0),
            0.0,
            &amount,
        );

        let caption = TextStyle {
            size: caption_size,
            color: self.palette.muted_text,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Middle,
        };
        canvas.draw_text(
            &self.secondary_label(),
            Point::new(center.x, center.y + amount_size / 2.0 + caption_size / 2.0),
            0.0,
            &caption,
        );
    }

    fn paint_store_name(&self, canvas: &mut dyn Canvas, center: Point) {
        let Some(name) = self.store_name.as_deref().filter(|n| !n.is_empty()) else {
            return;
        };
        let glyphs = layout_curved_text(
            name,
            center,
            self.geometry.text_radius(),
            self.config.label_font_size,
        );
        let style = TextStyle {
            size: self.config.label_font_size,
            color: self.store_color.unwrap_or(self.palette.text),
            weight: FontWeight::Semibold,
            anchor: TextAnchor::Middle,
        };
        paint_glyphs(canvas, &glyphs, &style);
    }
}

impl Widget for BudgetDial {
    fn measure(&self, constraints: Constraints) -> Size {
        let size = constraints.constrain(Size::square(self.config.size));
        Size::square(size.width.min(size.height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        // The dial fills the largest square anchored at the bounds' origin.
        let side = bounds.width.min(bounds.height).max(0.0);
        self.bounds = Rect::new(bounds.x, bounds.y, side, side);
        self.geometry =
            DialGeometry::new(side, self.config.stroke_width).with_origin(bounds.origin());
        LayoutResult {
            size: self.bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let frame = self.animator.frame();
        let rings = self.ring_layout();
        rings
            .outer
            .paint(canvas, rings.center, frame.outer.opacity as f32);
        rings
            .inner
            .paint(canvas, rings.center, frame.inner.opacity as f32);
        self.paint_center(canvas, rings.center);
        self.paint_store_name(canvas, rings.center);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if !self.is_mounted() {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.geometry.contains_point(position) {
                    self.pressed = Some(Press::Mouse);
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.pressed.take() == Some(Press::Mouse);
                if was_pressed && self.geometry.contains_point(position) {
                    self.request_edit()
                } else {
                    None
                }
            }
            Event::MouseLeave => {
                self.pressed = None;
                None
            }
            Event::TouchStart { id, position } => {
                if self.geometry.contains_point(position) {
                    self.pressed = Some(Press::Touch(*id));
                }
                None
            }
            Event::TouchEnd { id, position } => {
                if self.pressed == Some(Press::Touch(*id)) {
                    self.pressed = None;
                    if self.geometry.contains_point(position) {
                        return self.request_edit();
                    }
                }
                None
            }
            Event::TouchCancel { id } => {
                if self.pressed == Some(Press::Touch(*id)) {
                    self.pressed = None;
                }
                None
            }
            Event::KeyDown { key } if key.is_activation() && self.focused => self.request_edit(),
            Event::FocusIn => {
                self.focused = true;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.on_edit.is_some() {
            AccessibleRole::Button
        } else {
            AccessibleRole::Meter
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl std::fmt::Debug for BudgetDial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetDial")
            .field("snapshot", &self.snapshot)
            .field("readout", &self.readout)
            .field("animator", &self.animator)
            .field("store_name", &self.store_name)
            .field("has_on_edit", &self.on_edit.is_some())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Mode;
    use crate::status::SemanticColor;
    use glass_core::{DrawCommand, Key, RecordingCanvas};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn mounted(snapshot: BudgetSnapshot) -> BudgetDial {
        let mut dial = BudgetDial::new(snapshot);
        dial.layout(Rect::new(0.0, 0.0, 200.0, 200.0));
        dial.mount();
        dial
    }

    fn settle(dial: &mut BudgetDial) {
        dial.tick(1.0);
    }

    fn paint(dial: &BudgetDial) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        dial.paint(&mut canvas);
        canvas
    }

    fn click(dial: &mut BudgetDial, at: Point) -> Option<Box<dyn Any + Send>> {
        dial.event(&Event::MouseDown {
            position: at,
            button: MouseButton::Left,
        });
        dial.event(&Event::MouseUp {
            position: at,
            button: MouseButton::Left,
        })
    }

    // ===== Construction Tests =====

    #[test]
    fn test_dial_new_is_unmounted() {
        let dial = BudgetDial::new(BudgetSnapshot::default());
        assert!(!dial.is_mounted());
        assert_eq!(dial.measure(Constraints::unbounded()), Size::square(200.0));
    }

    #[test]
    fn test_dial_from_config_rejects_bad_palette() {
        let mut config = DialConfig::default();
        config.palette.accent = "not-a-colour".to_string();
        assert!(BudgetDial::from_config(config, BudgetSnapshot::default()).is_err());
    }

    #[test]
    fn test_measure_respects_constraints() {
        let dial = BudgetDial::new(BudgetSnapshot::default());
        let size = dial.measure(Constraints::loose(Size::new(120.0, 300.0)));
        assert_eq!(size, Size::square(120.0));
    }

    // ===== Label Tests =====

    #[test]
    fn test_labels_planning() {
        let dial = BudgetDial::new(BudgetSnapshot::new(50.0, 30.0, 0.0, Mode::Planning));
        assert_eq!(dial.primary_label(), "£30.00");
        assert_eq!(dial.secondary_label(), "of £50.00");
        assert_eq!(dial.accessible_name(), Some("Budget: £30.00 of £50.00"));
    }

    #[test]
    fn test_labels_shopping_without_budget() {
        let dial = BudgetDial::new(BudgetSnapshot::new(0.0, 30.0, 12.5, Mode::Shopping));
        assert_eq!(dial.primary_label(), "£12.50");
        assert_eq!(dial.secondary_label(), SET_BUDGET_PROMPT);
        assert!(dial.sentiment().is_none());
    }

    #[test]
    fn test_custom_currency() {
        let config = DialConfig {
            currency: "€".to_string(),
            ..DialConfig::default()
        };
        let dial = BudgetDial::from_config(
            config,
            BudgetSnapshot::new(50.0, 45.0, 65.0, Mode::Shopping),
        )
        .unwrap();
        assert_eq!(dial.sentiment().unwrap().message, "Over budget by €15.00");
    }

    // ===== Snapshot Tests =====

    #[test]
    fn test_set_snapshot_recomputes_and_animates() {
        let mut dial = mounted(BudgetSnapshot::new(50.0, 45.0, 10.0, Mode::Shopping));
        settle(&mut dial);
        assert!(!dial.is_animating());

        dial.set_snapshot(BudgetSnapshot::new(50.0, 45.0, 42.0, Mode::Shopping));
        assert!(dial.is_animating());
        assert_eq!(dial.readout().inner.color, SemanticColor::Warning);

        settle(&mut dial);
        assert!((dial.frame().inner.fill_ratio - 0.84).abs() < 1e-9);
    }

    #[test]
    fn test_set_same_snapshot_is_noop() {
        let snap = BudgetSnapshot::new(50.0, 45.0, 10.0, Mode::Shopping);
        let mut dial = mounted(snap);
        settle(&mut dial);
        dial.set_snapshot(snap);
        assert!(!dial.is_animating());
    }

    #[test]
    fn test_status_colour_follows_animated_ratios() {
        let mut dial = mounted(BudgetSnapshot::new(50.0, 45.0, 65.0, Mode::Shopping));
        settle(&mut dial);

        dial.set_snapshot(BudgetSnapshot::new(50.0, 45.0, 10.0, Mode::Shopping));
        assert_eq!(dial.readout().inner.color, SemanticColor::Success);
        dial.tick(0.016);

        // Still drawn over budget, so still drawn in danger.
        let inner = dial.ring_layout().inner;
        assert!(inner.overflow.is_some());
        assert_eq!(inner.fill.color, dial.palette().danger);

        settle(&mut dial);
        let inner = dial.ring_layout().inner;
        assert!(inner.overflow.is_none());
        assert_eq!(inner.fill.color, dial.palette().success);
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_planning_hides_inner_fill() {
        let mut dial = mounted(BudgetSnapshot::new(50.0, 30.0, 20.0, Mode::Planning));
        settle(&mut dial);
        let canvas = paint(&dial);

        let arcs: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Arc { radius, style, .. } => Some((*radius, style.color)),
                _ => None,
            })
            .collect();
        // Outer track + fill, inner track only.
        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[1].1, dial.palette().accent);
    }

    #[test]
    fn test_paint_over_budget_draws_overflow() {
        let mut dial = mounted(BudgetSnapshot::new(50.0, 45.0, 65.0, Mode::Shopping));
        settle(&mut dial);
        let canvas = paint(&dial);
        let danger = dial.palette().danger;
        let danger_arcs = canvas
            .commands()
            .iter()
            .filter(|cmd| {
                matches!(cmd, DrawCommand::Arc { style, .. } if style.color.to_hex() == danger.to_hex())
            })
            .count();
        // Inner fill and inner overflow.
        assert_eq!(danger_arcs, 2);
    }

    #[test]
    fn test_paint_center_labels() {
        let mut dial = mounted(BudgetSnapshot::new(50.0, 45.0, 42.0, Mode::Shopping));
        settle(&mut dial);
        let canvas = paint(&dial);
        let texts: Vec<&str> = canvas.texts().collect();
        assert_eq!(texts, vec!["£42.00", "of £50.00"]);
    }

    #[test]
    fn test_paint_store_name() {
        let mut dial = BudgetDial::new(BudgetSnapshot::new(50.0, 30.0, 0.0, Mode::Planning))
            .store_name("Aldi")
            .store_color(Color::rgb(0.0, 0.2, 0.6));
        dial.layout(Rect::new(0.0, 0.0, 200.0, 200.0));
        dial.mount();
        let canvas = paint(&dial);
        let texts: Vec<&str> = canvas.texts().collect();
        assert_eq!(texts, vec!["£30.00", "of £50.00", "A", "l", "d", "i"]);
    }

    #[test]
    fn test_layout_offsets_rings() {
        let mut dial = BudgetDial::new(BudgetSnapshot::new(50.0, 30.0, 0.0, Mode::Planning));
        dial.layout(Rect::new(40.0, 10.0, 200.0, 200.0));
        assert_eq!(dial.ring_layout().center, Point::new(140.0, 110.0));
    }

    #[test]
    fn test_layout_smaller_than_configured_size() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut dial = BudgetDial::new(BudgetSnapshot::new(50.0, 30.0, 20.0, Mode::Shopping))
            .on_edit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        let measured = dial.measure(Constraints::loose(Size::square(120.0)));
        assert_eq!(measured, Size::square(120.0));

        let result = dial.layout(Rect::from_size(measured));
        assert_eq!(result.size, measured);
        assert_eq!(dial.bounds(), Rect::new(0.0, 0.0, 120.0, 120.0));
        dial.mount();
        settle(&mut dial);

        let rings = dial.ring_layout();
        assert_eq!(rings.center, Point::new(60.0, 60.0));
        for cmd in paint(&dial).commands() {
            if let DrawCommand::Arc { radius, style, .. } = cmd {
                assert!(radius + style.width / 2.0 <= 60.0 + 1e-3);
            }
        }

        // On the painted outer ring, then past the footprint.
        assert!(click(&mut dial, Point::new(113.0, 60.0)).is_some());
        assert!(click(&mut dial, Point::new(180.0, 100.0)).is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_layout_uses_shorter_side() {
        let mut dial = BudgetDial::new(BudgetSnapshot::default());
        let result = dial.layout(Rect::new(10.0, 20.0, 300.0, 150.0));
        assert_eq!(result.size, Size::square(150.0));
        assert_eq!(dial.ring_layout().center, Point::new(85.0, 95.0));
    }

    // ===== Event Tests =====

    #[test]
    fn test_click_inside_requests_edit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut dial = BudgetDial::new(BudgetSnapshot::new(50.0, 30.0, 0.0, Mode::Planning))
            .on_edit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        dial.layout(Rect::new(0.0, 0.0, 200.0, 200.0));
        dial.mount();

        let msg = click(&mut dial, Point::new(100.0, 100.0)).unwrap();
        let request = msg.downcast_ref::<BudgetEditRequested>().unwrap();
        assert_eq!(request.budget, 50.0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(dial.accessible_role(), AccessibleRole::Button);
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut dial = mounted(BudgetSnapshot::default());
        assert!(click(&mut dial, Point::new(300.0, 100.0)).is_none());
    }

    #[test]
    fn test_press_outside_rings_is_ignored() {
        let mut dial = mounted(BudgetSnapshot::new(50.0, 30.0, 0.0, Mode::Planning));
        // Corner of the square footprint, beyond the outer stroke.
        assert!(click(&mut dial, Point::new(5.0, 5.0)).is_none());
        // Outer edge of the outer ring at 12 o'clock.
        assert!(click(&mut dial, Point::new(100.0, 1.0)).is_some());
    }

    #[test]
    fn test_drag_out_cancels_press() {
        let mut dial = mounted(BudgetSnapshot::default());
        dial.event(&Event::MouseDown {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Left,
        });
        dial.event(&Event::MouseLeave);
        let result = dial.event(&Event::MouseUp {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Left,
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_touch_press() {
        let mut dial = mounted(BudgetSnapshot::default());
        let at = Point::new(50.0, 50.0);
        dial.event(&Event::TouchStart {
            id: TouchId(7),
            position: at,
        });
        assert!(dial
            .event(&Event::TouchEnd {
                id: TouchId(8),
                position: at
            })
            .is_none());
        assert!(dial
            .event(&Event::TouchEnd {
                id: TouchId(7),
                position: at
            })
            .is_some());
    }

    #[test]
    fn test_touch_cancel() {
        let mut dial = mounted(BudgetSnapshot::default());
        let at = Point::new(50.0, 50.0);
        dial.event(&Event::TouchStart {
            id: TouchId(1),
            position: at,
        });
        dial.event(&Event::TouchCancel { id: TouchId(1) });
        assert!(dial
            .event(&Event::TouchEnd {
                id: TouchId(1),
                position: at
            })
            .is_none());
    }

    #[test]
    fn test_keyboard_activation_requires_focus() {
        let mut dial = mounted(BudgetSnapshot::default());
        let enter = Event::KeyDown { key: Key::Enter };
        assert!(dial.event(&enter).is_none());
        dial.event(&Event::FocusIn);
        assert!(dial.event(&enter).is_some());
        assert!(dial.event(&Event::KeyDown { key: Key::Escape }).is_none());
        dial.event(&Event::FocusOut);
        assert!(dial.event(&Event::KeyDown { key: Key::Space }).is_none());
    }

    #[test]
    fn test_unmounted_dial_ignores_events() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut dial = BudgetDial::new(BudgetSnapshot::default()).on_edit(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        dial.layout(Rect::new(0.0, 0.0, 200.0, 200.0));
        dial.mount();
        dial.unmount();
        assert!(click(&mut dial, Point::new(100.0, 100.0)).is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(dial.accessible_role(), AccessibleRole::Button);
    }

    #[test]
    fn test_meter_role_without_callback() {
        let dial = BudgetDial::new(BudgetSnapshot::default()).with_test_id("budget-dial");
        assert_eq!(dial.accessible_role(), AccessibleRole::Meter);
        assert_eq!(Widget::test_id(&dial), Some("budget-dial"));
    }
}
