//! Severity tiers for expiring items.

use serde::{Deserialize, Serialize};

/// Urgency tier derived from days-until-expiry, used for visual styling.
///
/// `Red` covers both already-expired items and items expiring within a
/// day; the distinction is carried by the status text, not the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Orange,
    Green,
}

impl Severity {
    /// Classify a days-until-expiry count.
    pub fn from_days(days: i64) -> Self {
        if days <= 1 {
            Self::Red
        } else if days <= 4 {
            Self::Orange
        } else {
            Self::Green
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Green => "Green",
        }
    }
}
