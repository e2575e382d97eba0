//! Expiry status calculation.
//!
//! Turns an item's expiry date and the current date into a status label and a
//! signed day count. Callers always pass `today` in, so nothing here reads the
//! clock and every function is deterministic.
//!
//! Thresholds form a total partition of the integers:
//! - `days < 0` → [`ExpiryStatus::Expired`]
//! - `days == 0` → [`ExpiryStatus::ExpiresToday`]
//! - `1..=6` → [`ExpiryStatus::ExpiringSoon`]
//! - `days >= 7` → [`ExpiryStatus::Good`]

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use std::fmt;

/// Smallest day count that is still considered fresh
pub const GOOD_THRESHOLD_DAYS: i64 = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Freshness label derived from an expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryStatus {
    /// Seven or more days left
    Good,
    /// One to six days left
    ExpiringSoon,
    /// Expires today
    ExpiresToday,
    /// Already past its expiry date
    Expired,
}

impl ExpiryStatus {
    /// Maps a signed day count to its status.
    #[must_use]
    pub const fn from_days(days_remaining: i64) -> Self {
        if days_remaining < 0 {
            Self::Expired
        } else if days_remaining == 0 {
            Self::ExpiresToday
        } else if days_remaining < GOOD_THRESHOLD_DAYS {
            Self::ExpiringSoon
        } else {
            Self::Good
        }
    }

    /// Short label for listings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::ExpiringSoon => "Expiring soon",
            Self::ExpiresToday => "Expires today",
            Self::Expired => "Expired",
        }
    }

    /// Status icon used in Discord messages
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Good => "✅",
            Self::ExpiringSoon => "⚠️",
            Self::ExpiresToday => "🔥",
            Self::Expired => "⛔",
        }
    }

    /// Whether the item needs attention soon (today or within the soon band)
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::ExpiresToday | Self::ExpiringSoon)
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status plus the signed number of days until expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryInfo {
    /// Derived freshness label
    pub status: ExpiryStatus,
    /// Whole days until expiry; negative once expired
    pub days_remaining: i64,
}

/// Computes the expiry status of an item.
///
/// `days_remaining` is `expiry_date - today` in whole days with the sign kept.
#[must_use]
pub fn compute_status(expiry_date: NaiveDate, today: NaiveDate) -> ExpiryInfo {
    let days_remaining = expiry_date.signed_duration_since(today).num_days();
    ExpiryInfo {
        status: ExpiryStatus::from_days(days_remaining),
        days_remaining,
    }
}

/// Parses a `YYYY-MM-DD` expiry date.
///
/// # Errors
/// Returns [`Error::InvalidDate`] if the input is empty or not a valid date.
pub fn parse_expiry_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Parses `input` and computes its status against `today`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] if the input can't be parsed. Callers should
/// show an "unknown" status rather than guess.
pub fn compute_status_from_input(input: &str, today: NaiveDate) -> Result<ExpiryInfo> {
    parse_expiry_date(input).map(|date| compute_status(date, today))
}

/// Formats a date the way users type it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Describes a day count in words, e.g. "Expires in 3 days".
#[must_use]
pub fn describe_days(days_remaining: i64) -> String {
    match days_remaining {
        -1 => "Expired yesterday".to_string(),
        d if d < 0 => format!("Expired {} days ago", d.unsigned_abs()),
        0 => "Expires today!".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("Expires in {d} days"),
    }
}
