//! Ratio and status calculator.
//!
//! Pure functions from a [`BudgetSnapshot`] to the two ring states and the
//! sentiment line. Nothing here holds state or performs I/O, and the only
//! guard is against dividing by a zero budget. Negative or NaN inputs flow
//! through the arithmetic unchanged.

use crate::snapshot::{BudgetSnapshot, Mode};
use serde::{Deserialize, Serialize};

/// Below or at this share of the budget a plan has lots of room.
pub const COMFORT_THRESHOLD: f64 = 0.5;
/// Above this share of the budget the dial turns to warning.
pub const WARNING_THRESHOLD: f64 = 0.8;
/// Above this share of the budget the dial turns to danger.
pub const DANGER_THRESHOLD: f64 = 1.0;
/// Largest overflow drawn, as a fraction of the budget.
pub const OVERFLOW_CAP: f64 = 1.0;

/// Health color of a ring or message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticColor {
    /// Within budget
    #[default]
    Success,
    /// Close to the limit
    Warning,
    /// Over budget
    Danger,
}

/// `value / budget`, or `None` when no budget is set.
#[must_use]
pub fn budget_ratio(value: f64, budget: f64) -> Option<f64> {
    (budget > 0.0).then(|| value / budget)
}

/// Fraction of the budget consumed by `value`, capped at 1.
#[must_use]
pub fn fill_ratio(value: f64, budget: f64) -> f64 {
    budget_ratio(value, budget).map_or(0.0, |ratio| if ratio > 1.0 { 1.0 } else { ratio })
}

/// Fraction by which `value` exceeds the budget, clamped to `[0, OVERFLOW_CAP]`.
#[must_use]
pub fn overflow_ratio(value: f64, budget: f64) -> f64 {
    budget_ratio(value - budget, budget).map_or(0.0, |extra| extra.clamp(0.0, OVERFLOW_CAP))
}

/// Threshold band for a budget ratio. Both boundaries are exclusive on the
/// alarming side: exactly 1.0 is a warning, exactly 0.8 is a success.
#[must_use]
pub fn status_color(ratio: f64) -> SemanticColor {
    if ratio > DANGER_THRESHOLD {
        SemanticColor::Danger
    } else if ratio > WARNING_THRESHOLD {
        SemanticColor::Warning
    } else {
        SemanticColor::Success
    }
}

/// Derived state of one ring. Replaced wholesale whenever inputs change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RingState {
    /// Share of the budget painted by the base arc, in `[0, 1]`
    pub fill_ratio: f64,
    /// Extra share beyond the budget painted by the overflow arc, in `[0, 1]`
    pub overflow_ratio: f64,
    /// Threshold color for the ring's reference value
    pub color: SemanticColor,
}

impl RingState {
    /// A ring with nothing painted.
    pub const EMPTY: Self = Self {
        fill_ratio: 0.0,
        overflow_ratio: 0.0,
        color: SemanticColor::Success,
    };

    /// Ring state for `value` measured against `budget`.
    #[must_use]
    pub fn for_value(value: f64, budget: f64) -> Self {
        Self {
            fill_ratio: fill_ratio(value, budget),
            overflow_ratio: overflow_ratio(value, budget),
            color: budget_ratio(value, budget).map_or(SemanticColor::Success, status_color),
        }
    }

    /// Ring state for ratios caught between snapshots. The colour follows
    /// the combined ratio `fill + overflow`.
    #[must_use]
    pub fn from_ratios(fill_ratio: f64, overflow_ratio: f64) -> Self {
        Self {
            fill_ratio,
            overflow_ratio,
            color: status_color(fill_ratio + overflow_ratio),
        }
    }

    /// Whether the overflow arc is visible.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.overflow_ratio > 0.0
    }
}

/// Short assessment of budget health shown beneath the dial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Human-readable copy
    pub message: String,
    /// Color the copy is shown in
    pub color: SemanticColor,
}

impl Sentiment {
    fn new(message: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            message: message.into(),
            color,
        }
    }
}

/// Format money as `{currency}{amount}` with two decimals.
#[must_use]
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

/// Sentiment for the snapshot's mode, or `None` when no budget is set.
///
/// Planning judges `planned` for fit; every other mode judges `spent` for
/// progress.
#[must_use]
pub fn sentiment(snapshot: &BudgetSnapshot, currency: &str) -> Option<Sentiment> {
    let value = snapshot.headline_value();
    let ratio = budget_ratio(value, snapshot.budget)?;

    if ratio > DANGER_THRESHOLD {
        let over = format_amount(currency, value - snapshot.budget);
        return Some(Sentiment::new(
            format!("Over budget by {over}"),
            SemanticColor::Danger,
        ));
    }

    let sentiment = match snapshot.mode {
        Mode::Planning if ratio > WARNING_THRESHOLD => Sentiment::new(
            "Tight fit \u{2014} almost at your limit",
            SemanticColor::Warning,
        ),
        Mode::Planning if ratio > COMFORT_THRESHOLD => Sentiment::new(
            "Fits your budget \u{2014} looking good",
            SemanticColor::Success,
        ),
        Mode::Planning => Sentiment::new(
            "Fits your budget \u{2014} lots of room",
            SemanticColor::Success,
        ),
        _ if ratio > WARNING_THRESHOLD => Sentiment::new(
            "Getting close \u{2014} nearly there",
            SemanticColor::Warning,
        ),
        _ => Sentiment::new("On track \u{2014} doing well", SemanticColor::Success),
    };
    Some(sentiment)
}

/// Everything the calculator derives from one snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DialReadout {
    /// Planned-vs-budget ring
    pub outer: RingState,
    /// Spent-vs-budget ring
    pub inner: RingState,
    /// Mode-dependent assessment, absent without a budget
    pub sentiment: Option<Sentiment>,
}

impl DialReadout {
    /// Derive ring states and sentiment from a snapshot.
    #[must_use]
    pub fn compute(snapshot: &BudgetSnapshot, currency: &str) -> Self {
        Self {
            outer: RingState::for_value(snapshot.planned, snapshot.budget),
            inner: RingState::for_value(snapshot.spent, snapshot.budget),
            sentiment: sentiment(snapshot, currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ===== Ratio Tests =====

    #[test]
    fn test_fill_ratio_basic() {
        assert!(approx(fill_ratio(30.0, 50.0), 0.6));
        assert!(approx(fill_ratio(50.0, 50.0), 1.0));
        assert!(approx(fill_ratio(65.0, 50.0), 1.0));
    }

    #[test]
    fn test_zero_budget_guards_division() {
        assert_eq!(fill_ratio(30.0, 0.0), 0.0);
        assert_eq!(overflow_ratio(30.0, 0.0), 0.0);
        assert_eq!(budget_ratio(30.0, 0.0), None);
        assert_eq!(RingState::for_value(30.0, 0.0), RingState::EMPTY);
    }

    #[test]
    fn test_overflow_ratio() {
        assert!(approx(overflow_ratio(40.0, 50.0), 0.0));
        assert!(approx(overflow_ratio(65.0, 50.0), 0.3));
        assert!(approx(overflow_ratio(100.0, 50.0), 1.0));
    }

    #[test]
    fn test_overflow_cap() {
        // Three times the budget is 200% extra, drawn as 100%.
        assert!(approx(overflow_ratio(150.0, 50.0), 1.0));
    }

    #[test]
    fn test_negative_inputs_are_not_validated() {
        assert!(approx(fill_ratio(-10.0, 50.0), -0.2));
        assert_eq!(status_color(-0.2), SemanticColor::Success);
        assert!(fill_ratio(f64::NAN, 50.0).is_nan());
    }

    // ===== Threshold Tests =====

    #[test]
    fn test_status_color_boundaries() {
        assert_eq!(status_color(1.0), SemanticColor::Warning);
        assert_eq!(status_color(1.0001), SemanticColor::Danger);
        assert_eq!(status_color(0.8), SemanticColor::Success);
        assert_eq!(status_color(0.8001), SemanticColor::Warning);
        assert_eq!(status_color(0.0), SemanticColor::Success);
    }

    #[test]
    fn test_ring_state_exact_budget_is_warning() {
        let ring = RingState::for_value(50.0, 50.0);
        assert_eq!(ring.color, SemanticColor::Warning);
        assert!(!ring.is_over_budget());
    }

    #[test]
    fn test_ring_state_eighty_percent_is_success() {
        assert_eq!(RingState::for_value(40.0, 50.0).color, SemanticColor::Success);
    }

    #[test]
    fn test_ring_state_from_ratios_matches_settled_state() {
        for spent in [0.0, 20.0, 42.0, 50.0, 65.0, 150.0] {
            let settled = RingState::for_value(spent, 50.0);
            let rebuilt = RingState::from_ratios(settled.fill_ratio, settled.overflow_ratio);
            assert_eq!(rebuilt, settled, "spent {spent}");
        }
    }

    #[test]
    fn test_ring_state_from_ratios_mid_transition() {
        // Full ring plus overflow reads as danger even if the target is not.
        let ring = RingState::from_ratios(0.97, 0.25);
        assert_eq!(ring.color, SemanticColor::Danger);
        assert!(ring.is_over_budget());
        assert_eq!(RingState::from_ratios(0.9, 0.0).color, SemanticColor::Warning);
    }

    // ===== Sentiment Tests =====

    #[test]
    fn test_sentiment_absent_without_budget() {
        for mode in Mode::ALL {
            let snap = BudgetSnapshot::new(0.0, 30.0, 10.0, mode);
            assert_eq!(sentiment(&snap, "£"), None);
        }
    }

    #[test]
    fn test_sentiment_planning_bands() {
        let at = |planned| sentiment(&BudgetSnapshot::new(50.0, planned, 0.0, Mode::Planning), "£");

        let roomy = at(20.0).unwrap();
        assert_eq!(roomy.message, "Fits your budget \u{2014} lots of room");
        assert_eq!(roomy.color, SemanticColor::Success);

        let good = at(30.0).unwrap();
        assert_eq!(good.message, "Fits your budget \u{2014} looking good");
        assert_eq!(good.color, SemanticColor::Success);

        let tight = at(45.0).unwrap();
        assert_eq!(tight.message, "Tight fit \u{2014} almost at your limit");
        assert_eq!(tight.color, SemanticColor::Warning);

        let over = at(62.5).unwrap();
        assert_eq!(over.message, "Over budget by £12.50");
        assert_eq!(over.color, SemanticColor::Danger);
    }

    #[test]
    fn test_sentiment_planning_ignores_spent() {
        let snap = BudgetSnapshot::new(50.0, 20.0, 80.0, Mode::Planning);
        assert_eq!(
            sentiment(&snap, "£").unwrap().message,
            "Fits your budget \u{2014} lots of room"
        );
    }

    #[test]
    fn test_sentiment_progress_modes() {
        for mode in [Mode::Shopping, Mode::Completed, Mode::Archived] {
            let on_track = sentiment(&BudgetSnapshot::new(50.0, 45.0, 10.0, mode), "£").unwrap();
            assert_eq!(on_track.message, "On track \u{2014} doing well");

            let close = sentiment(&BudgetSnapshot::new(50.0, 45.0, 42.0, mode), "£").unwrap();
            assert_eq!(close.message, "Getting close \u{2014} nearly there");
            assert_eq!(close.color, SemanticColor::Warning);
        }
    }

    #[test]
    fn test_sentiment_uses_currency_verbatim() {
        let snap = BudgetSnapshot::new(50.0, 45.0, 65.0, Mode::Shopping);
        assert_eq!(sentiment(&snap, "€").unwrap().message, "Over budget by €15.00");
        assert_eq!(sentiment(&snap, "US$").unwrap().message, "Over budget by US$15.00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("£", 42.0), "£42.00");
        assert_eq!(format_amount("£", 3.456), "£3.46");
        assert_eq!(format_amount("", 0.0), "0.00");
    }

    // ===== Scenario Tests =====

    #[test]
    fn test_scenario_on_budget_planning() {
        let readout =
            DialReadout::compute(&BudgetSnapshot::new(50.0, 30.0, 0.0, Mode::Planning), "£");
        assert!(approx(readout.outer.fill_ratio, 0.6));
        assert!(approx(readout.outer.overflow_ratio, 0.0));
        assert_eq!(
            readout.sentiment.unwrap().message,
            "Fits your budget \u{2014} looking good"
        );
    }

    #[test]
    fn test_scenario_near_limit_shopping() {
        let readout =
            DialReadout::compute(&BudgetSnapshot::new(50.0, 45.0, 42.0, Mode::Shopping), "£");
        assert!(approx(readout.inner.fill_ratio, 0.84));
        assert_eq!(readout.inner.color, SemanticColor::Warning);
        assert_eq!(
            readout.sentiment.unwrap().message,
            "Getting close \u{2014} nearly there"
        );
    }

    #[test]
    fn test_scenario_over_budget() {
        let readout =
            DialReadout::compute(&BudgetSnapshot::new(50.0, 45.0, 65.0, Mode::Shopping), "£");
        assert!(approx(readout.inner.fill_ratio, 1.0));
        assert!(approx(readout.inner.overflow_ratio, 0.3));
        assert_eq!(readout.inner.color, SemanticColor::Danger);
        let sentiment = readout.sentiment.unwrap();
        assert_eq!(sentiment.message, "Over budget by £15.00");
        assert_eq!(sentiment.color, SemanticColor::Danger);
    }

    #[test]
    fn test_scenario_zero_budget() {
        let readout =
            DialReadout::compute(&BudgetSnapshot::new(0.0, 45.0, 65.0, Mode::Shopping), "£");
        assert_eq!(readout.outer, RingState::EMPTY);
        assert_eq!(readout.inner, RingState::EMPTY);
        assert!(readout.sentiment.is_none());
    }

    proptest! {
        #[test]
        fn prop_ratios_clamped(budget in 0.0f64..10_000.0, value in 0.0f64..100_000.0) {
            let ring = RingState::for_value(value, budget);
            prop_assert!((0.0..=1.0).contains(&ring.fill_ratio));
            prop_assert!((0.0..=1.0).contains(&ring.overflow_ratio));
        }

        #[test]
        fn prop_overflow_only_when_full(budget in 0.01f64..10_000.0, value in 0.0f64..100_000.0) {
            let ring = RingState::for_value(value, budget);
            if ring.overflow_ratio > 0.0 {
                prop_assert!((ring.fill_ratio - 1.0).abs() < 1e-12);
                prop_assert_eq!(ring.color, SemanticColor::Danger);
            }
        }

        #[test]
        fn prop_status_color_monotonic(a in -2.0f64..4.0, b in -2.0f64..4.0) {
            let rank = |c: SemanticColor| match c {
                SemanticColor::Success => 0,
                SemanticColor::Warning => 1,
                SemanticColor::Danger => 2,
            };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(status_color(lo)) <= rank(status_color(hi)));
        }

        #[test]
        fn prop_readout_is_pure(
            budget in 0.0f64..500.0,
            planned in 0.0f64..1_000.0,
            spent in 0.0f64..1_000.0,
            mode_idx in 0usize..4,
        ) {
            let snap = BudgetSnapshot::new(budget, planned, spent, Mode::ALL[mode_idx]);
            prop_assert_eq!(DialReadout::compute(&snap, "£"), DialReadout::compute(&snap, "£"));
        }
    }
}
