//! Calendar-day arithmetic over `yyyy-MM-dd` date strings.
//!
//! All functions are total: malformed input degrades to a defined
//! fallback (0 days, `false`, or raw-string passthrough) so in-progress
//! form input never crashes the caller.

use chrono::{Duration, Local, NaiveDate};

/// Storage and interchange format for all dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed window (inclusive, in days) for the "expiring soon" bucket.
///
/// Independent of the user-configurable notification lead time; this
/// constant drives the badge and the expiring-status filter.
pub const EXPIRING_WINDOW_DAYS: i64 = 4;

/// Strictly parse a `yyyy-MM-dd` string into a real calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// True iff `s` strictly parses as a real `yyyy-MM-dd` calendar date.
pub fn is_valid_date_string(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Signed whole-day difference between `expire_date` and `today`.
///
/// Negative means already expired. An unparseable date yields 0.
pub fn days_until_expiry_at(expire_date: &str, today: NaiveDate) -> i64 {
    match parse_date(expire_date) {
        Some(date) => (date - today).num_days(),
        None => 0,
    }
}

/// [`days_until_expiry_at`] relative to the local calendar date.
pub fn days_until_expiry(expire_date: &str) -> i64 {
    days_until_expiry_at(expire_date, Local::now().date_naive())
}

/// `today + days`, formatted as `yyyy-MM-dd`.
///
/// Keeps a "days until expiry" input and an absolute "expiry date" input
/// mutually consistent in the edit form.
pub fn expire_date_from_offset_at(days: i64, today: NaiveDate) -> String {
    (today + Duration::days(days)).format(DATE_FORMAT).to_string()
}

/// [`expire_date_from_offset_at`] relative to the local calendar date.
pub fn expire_date_from_offset(days: i64) -> String {
    expire_date_from_offset_at(days, Local::now().date_naive())
}

/// Whether a days-until-expiry count means the item is already expired.
pub fn is_expired(days: i64) -> bool {
    days < 0
}

/// Whether a days-until-expiry count falls in the expiring-soon window.
pub fn is_expiring(days: i64) -> bool {
    (0..=EXPIRING_WINDOW_DAYS).contains(&days)
}

/// Human-readable expiry status for a days-until-expiry count.
pub fn status_text(days: i64) -> String {
    if days < 0 {
        format!("Expired {} days ago", -days)
    } else if days == 0 {
        "Expires today".to_string()
    } else if days == 1 {
        "Expires tomorrow".to_string()
    } else {
        format!("Expires in {} days", days)
    }
}

/// Render a stored `yyyy-MM-dd` date as "Mon dd, yyyy" for display.
///
/// Unparseable input is passed through unchanged.
pub fn format_display_date(s: &str) -> String {
    match parse_date(s) {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => s.to_string(),
    }
}
