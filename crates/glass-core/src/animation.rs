//! Easing curves, duration-based tweens, and a host frame clock.
//!
//! A [`Tween`] is an explicit interpolation state (start, target, elapsed
//! time, easing) advanced by the host's per-frame callback. Retargeting a
//! tween mid-flight restarts it from its *current* value so the output never
//! jumps.

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in and out
    CubicInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// Tween - Duration-Based Animated Value
// =============================================================================

/// A value animated toward a target over a fixed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Value the current run started from
    from: f64,
    /// Value the current run ends at
    to: f64,
    /// Run length in seconds
    duration: f64,
    /// Seconds elapsed in the current run
    elapsed: f64,
    /// Easing curve
    easing: Easing,
}

impl Tween {
    /// Create a tween resting at `value`.
    #[must_use]
    pub fn new(value: f64, duration: f64) -> Self {
        let duration = duration.max(0.0);
        Self {
            from: value,
            to: value,
            duration,
            elapsed: duration,
            easing: Easing::default(),
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Value the tween is heading toward.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// Run length in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Easing curve in use.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Whether the current run has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Progress of the current run from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Head toward a new target, starting from the current value.
    ///
    /// Returns `false` when `target` is already the destination, in which
    /// case any in-flight run continues undisturbed.
    pub fn retarget(&mut self, target: f64) -> bool {
        if (self.to - target).abs() < f64::EPSILON {
            return false;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
        true
    }

    /// Place the tween at `value` with no transition.
    pub fn jump_to(&mut self, value: f64) {
        self.from = value;
        self.to = value;
        self.elapsed = self.duration;
    }

    /// Advance the run by `dt` seconds. Negative deltas are ignored.
    pub fn update(&mut self, dt: f64) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }
}

// =============================================================================
// FrameClock - Host Timestamps to Frame Deltas
// =============================================================================

/// Converts monotonic host timestamps into per-frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Last frame timestamp in microseconds
    last_frame_us: Option<u64>,
    /// Total frames observed
    total_frames: u64,
}

impl FrameClock {
    /// Create a clock that has not seen a frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame and return seconds since the previous one.
    ///
    /// The first frame, and any timestamp that runs backwards, yields 0.0.
    pub fn frame(&mut self, now_us: u64) -> f64 {
        let delta_us = self
            .last_frame_us
            .map_or(0, |last| now_us.saturating_sub(last));
        self.last_frame_us = Some(now_us.max(self.last_frame_us.unwrap_or(0)));
        self.total_frames += 1;
        delta_us as f64 / 1_000_000.0
    }

    /// Forget the previous timestamp (e.g. after the host was suspended).
    pub fn reset(&mut self) {
        self.last_frame_us = None;
    }

    /// Get total frames recorded.
    #[must_use]
    pub const fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

// =============================================================================
// Tests
// =============================================================================
