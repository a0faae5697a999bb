//! Budget input snapshot supplied by the host on every render cycle.

use crate::error::DialError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Building the list, nothing bought yet
    #[default]
    Planning,
    /// In the store, checking items off
    Shopping,
    /// Trip finished
    Completed,
    /// List kept for history
    Archived,
}

impl Mode {
    /// All modes, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Planning,
        Self::Shopping,
        Self::Completed,
        Self::Archived,
    ];

    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Shopping => "shopping",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Whether spending (rather than planning) is what the dial reports.
    #[must_use]
    pub const fn tracks_spending(self) -> bool {
        !matches!(self, Self::Planning)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DialError::InvalidMode(s.to_string()))
    }
}

/// Budget, planned and spent totals for one list, plus its mode.
///
/// Values are not validated: overshoot (`spent > planned`, `planned > budget`)
/// is an expected case, and a zero budget means "no budget set".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    /// User-set spending ceiling
    pub budget: f64,
    /// Sum of estimated costs of all list items
    pub planned: f64,
    /// Sum of costs of checked-off items
    pub spent: f64,
    /// List lifecycle stage
    pub mode: Mode,
}

impl BudgetSnapshot {
    /// Create a snapshot.
    #[must_use]
    pub const fn new(budget: f64, planned: f64, spent: f64, mode: Mode) -> Self {
        Self {
            budget,
            planned,
            spent,
            mode,
        }
    }

    /// Whether a budget has been set.
    #[must_use]
    pub fn has_budget(&self) -> bool {
        self.budget > 0.0
    }

    /// The total the current mode reports on: `planned` while planning,
    /// `spent` afterwards.
    #[must_use]
    pub const fn headline_value(&self) -> f64 {
        if self.mode.tracks_spending() {
            self.spent
        } else {
            self.planned
        }
    }
}
