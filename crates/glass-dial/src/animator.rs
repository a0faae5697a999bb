//! Animation coordinator for the dial.
//!
//! Six tweens run independently: fill, overflow and opacity for each ring.
//! The host drives them with [`DialAnimator::tick`] from its frame callback.
//! A new target arriving mid-flight restarts the affected tweens from their
//! current value, so the latest snapshot always wins and nothing snaps.

use crate::config::DialConfig;
use crate::snapshot::Mode;
use crate::status::{DialReadout, RingState};
use glass_core::{Easing, Tween};
use serde::{Deserialize, Serialize};

/// Callback invoked with every frame produced while animating.
pub type FrameCallback = Box<dyn FnMut(&AnimatedFrame) + Send>;

/// Ring opacities for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeOpacity {
    /// Planned ring
    pub outer: f64,
    /// Spent ring
    pub inner: f64,
}

impl ModeOpacity {
    /// Prominence of each ring in `mode`.
    #[must_use]
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Planning => Self {
                outer: 1.0,
                inner: 0.0,
            },
            Mode::Shopping => Self {
                outer: 0.25,
                inner: 1.0,
            },
            Mode::Completed | Mode::Archived => Self {
                outer: 0.2,
                inner: 0.7,
            },
        }
    }
}

/// Destination values for one transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingTargets {
    /// Planned ring
    pub outer: RingState,
    /// Spent ring
    pub inner: RingState,
    /// Mode, which sets the opacities
    pub mode: Mode,
}

impl RingTargets {
    /// Targets for a calculator readout in `mode`.
    #[must_use]
    pub fn from_readout(readout: &DialReadout, mode: Mode) -> Self {
        Self {
            outer: readout.outer,
            inner: readout.inner,
            mode,
        }
    }
}

/// Interpolated values for one ring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RingFrame {
    /// Current base fill ratio
    pub fill_ratio: f64,
    /// Current overflow ratio
    pub overflow_ratio: f64,
    /// Current opacity
    pub opacity: f64,
}

/// Interpolated values for both rings, read by the renderer every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimatedFrame {
    /// Planned ring
    pub outer: RingFrame,
    /// Spent ring
    pub inner: RingFrame,
}

#[derive(Debug, Clone)]
struct RingTweens {
    fill: Tween,
    overflow: Tween,
    opacity: Tween,
}

impl RingTweens {
    fn new(ratio_duration: f64, opacity_duration: f64, easing: Easing) -> Self {
        Self {
            fill: Tween::new(0.0, ratio_duration).with_easing(easing),
            overflow: Tween::new(0.0, ratio_duration).with_easing(easing),
            opacity: Tween::new(0.0, opacity_duration).with_easing(easing),
        }
    }

    fn retarget(&mut self, state: &RingState, opacity: f64) -> bool {
        // Non-short-circuiting so every tween sees its new target.
        self.fill.retarget(state.fill_ratio)
            | self.overflow.retarget(state.overflow_ratio)
            | self.opacity.retarget(opacity)
    }

    fn update(&mut self, dt: f64) {
        self.fill.update(dt);
        self.overflow.update(dt);
        self.opacity.update(dt);
    }

    fn settle(&mut self) {
        for tween in [&mut self.fill, &mut self.overflow, &mut self.opacity] {
            tween.jump_to(tween.value());
        }
    }

    fn is_animating(&self) -> bool {
        !(self.fill.is_complete() && self.overflow.is_complete() && self.opacity.is_complete())
    }

    fn frame(&self) -> RingFrame {
        RingFrame {
            fill_ratio: self.fill.value(),
            overflow_ratio: self.overflow.value(),
            opacity: self.opacity.value(),
        }
    }
}

/// Owns the in-flight interpolation state for one mounted dial.
pub struct DialAnimator {
    outer: RingTweens,
    inner: RingTweens,
    mode: Option<Mode>,
    mounted: bool,
    listeners: Vec<FrameCallback>,
}

impl DialAnimator {
    /// Create an unmounted animator with the given durations in seconds.
    #[must_use]
    pub fn new(ratio_duration: f64, opacity_duration: f64, easing: Easing) -> Self {
        Self {
            outer: RingTweens::new(ratio_duration, opacity_duration, easing),
            inner: RingTweens::new(ratio_duration, opacity_duration, easing),
            mode: None,
            mounted: false,
            listeners: Vec::new(),
        }
    }

    /// Create an unmounted animator with durations and easing from `config`.
    #[must_use]
    pub fn from_config(config: &DialConfig) -> Self {
        Self::new(
            config.ratio_duration(),
            config.opacity_duration(),
            config.easing,
        )
    }

    /// Mount with initial targets.
    ///
    /// Ratios sweep up from zero; opacities start at the mode's values with
    /// no fade. Mounting an already mounted animator retargets it instead.
    pub fn mount(&mut self, targets: &RingTargets) {
        if self.mounted {
            self.retarget(targets);
            return;
        }
        let opacity = ModeOpacity::for_mode(targets.mode);
        let rings = [
            (&mut self.outer, opacity.outer),
            (&mut self.inner, opacity.inner),
        ];
        for (ring, level) in rings {
            ring.fill.jump_to(0.0);
            ring.overflow.jump_to(0.0);
            ring.opacity.jump_to(level);
        }
        self.mounted = true;
        self.mode = Some(targets.mode);
        tracing::debug!(mode = %targets.mode, "dial animator mounted");
        self.retarget(targets);
    }

    /// Head toward new targets from wherever each value currently is.
    ///
    /// Returns `true` if any tween restarted. Ignored while unmounted.
    pub fn retarget(&mut self, targets: &RingTargets) -> bool {
        if !self.mounted {
            return false;
        }
        if self.mode != Some(targets.mode) {
            tracing::debug!(from = ?self.mode, to = %targets.mode, "dial mode switch");
            self.mode = Some(targets.mode);
        }
        let opacity = ModeOpacity::for_mode(targets.mode);
        let outer = self.outer.retarget(&targets.outer, opacity.outer);
        let inner = self.inner.retarget(&targets.inner, opacity.inner);
        if outer || inner {
            tracing::debug!(
                outer_fill = targets.outer.fill_ratio,
                inner_fill = targets.inner.fill_ratio,
                mode = %targets.mode,
                "dial retarget"
            );
        }
        outer || inner
    }

    /// Advance every tween by `dt` seconds.
    ///
    /// Listeners are called when the frame came from an in-flight
    /// transition. Returns `None` once unmounted.
    pub fn tick(&mut self, dt: f64) -> Option<AnimatedFrame> {
        if !self.mounted {
            return None;
        }
        let active = self.is_animating();
        self.outer.update(dt);
        self.inner.update(dt);
        let frame = self.frame();
        if active {
            tracing::trace!(dt, ?frame, "dial tick");
            for listener in &mut self.listeners {
                listener(&frame);
            }
        }
        Some(frame)
    }

    /// Register a per-frame listener. Ignored while unmounted.
    pub fn on_frame(&mut self, callback: impl FnMut(&AnimatedFrame) + Send + 'static) {
        if self.mounted {
            self.listeners.push(Box::new(callback));
        }
    }

    /// Release all in-flight transitions and listeners.
    ///
    /// Nothing fires after this returns. Values freeze where they were.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let dropped = self.listeners.len();
        self.listeners.clear();
        self.outer.settle();
        self.inner.settle();
        self.mounted = false;
        tracing::debug!(listeners = dropped, "dial animator unmounted");
    }

    /// Whether any tween is mid-flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mounted && (self.outer.is_animating() || self.inner.is_animating())
    }

    /// Whether the animator is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mode of the latest targets.
    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Current interpolated values.
    #[must_use]
    pub fn frame(&self) -> AnimatedFrame {
        AnimatedFrame {
            outer: self.outer.frame(),
            inner: self.inner.frame(),
        }
    }
}

impl Default for DialAnimator {
    fn default() -> Self {
        Self::from_config(&DialConfig::default())
    }
}

impl std::fmt::Debug for DialAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialAnimator")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("mode", &self.mode)
            .field("mounted", &self.mounted)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
