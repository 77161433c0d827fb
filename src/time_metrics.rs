//! # Time Metrics
//!
//! Due-date arithmetic for task views. The evaluation instant is always
//! passed in by the caller so results are deterministic for a given render.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::constants::{display::DEFAULT_DATE_FORMAT, labels::NO_DUE_DATE, time::MILLIS_PER_DAY};

/// Whole days until `due_date`, rounded up.
///
/// Returns `None` when there is no due date. Zero means due within the
/// current 24h window starting at `now`; negative values mean overdue and
/// are never clamped.
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use taskboard_core::time_metrics::days_remaining;
///
/// let now = Utc::now();
/// assert_eq!(days_remaining(Some(now), now), Some(0));
/// assert_eq!(days_remaining(Some(now + Duration::hours(30)), now), Some(2));
/// assert_eq!(days_remaining(Some(now - Duration::days(1)), now), Some(-1));
/// assert_eq!(days_remaining(None, now), None);
/// ```
pub fn days_remaining(due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    let due_date = due_date?;
    let millis = due_date.signed_duration_since(now).num_milliseconds();
    Some(ceil_div(millis, MILLIS_PER_DAY))
}

/// Render a due date for display, or the "No due date" label.
///
/// An unusable `format` falls back to the default month/day/year pattern
/// instead of panicking during formatting.
pub fn format_due_date(due_date: Option<DateTime<Utc>>, format: &str) -> String {
    let Some(due_date) = due_date else {
        return NO_DUE_DATE.to_string();
    };

    let mut rendered = String::new();
    if write!(rendered, "{}", due_date.format(format)).is_err() {
        tracing::warn!(format = %format, "Unusable date format, using default");
        return due_date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    rendered
}

/// Check a strftime pattern before it reaches [`format_due_date`].
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

pub fn is_overdue(days_left: Option<i64>) -> bool {
    matches!(days_left, Some(days) if days < 0)
}

// Ceiling division for a positive divisor.
fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    -((-numerator).div_euclid(divisor))
}
