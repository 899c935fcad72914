use serde::{Deserialize, Deserializer, Serialize};

/// Smallest allowed notification lead time, in days.
pub const MIN_DAYS_BEFORE_EXPIRY: u8 = 1;
/// Largest allowed notification lead time, in days.
pub const MAX_DAYS_BEFORE_EXPIRY: u8 = 10;

/// User-configurable expiry reminder settings.
///
/// `days_before_expiry` is the collaborator-facing reminder lead time and
/// is kept in `[1, 10]`. It is independent of the fixed 4-day window that
/// drives the expiring badge (`larder_expiry::EXPIRING_WINDOW_DAYS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub enabled: bool,
    #[serde(deserialize_with = "clamp_days")]
    days_before_expiry: u8,
}

impl NotificationPrefs {
    /// Build preferences, clamping the lead time into range.
    pub fn new(enabled: bool, days_before_expiry: u8) -> Self {
        Self {
            enabled,
            days_before_expiry: days_before_expiry
                .clamp(MIN_DAYS_BEFORE_EXPIRY, MAX_DAYS_BEFORE_EXPIRY),
        }
    }

    pub fn days_before_expiry(&self) -> u8 {
        self.days_before_expiry
    }

    /// Set the lead time, clamping into range.
    pub fn set_days_before_expiry(&mut self, days: u8) {
        self.days_before_expiry = days.clamp(MIN_DAYS_BEFORE_EXPIRY, MAX_DAYS_BEFORE_EXPIRY);
    }
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            days_before_expiry: 3,
        }
    }
}

fn clamp_days<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u8::deserialize(deserializer)?;
    Ok(raw.clamp(MIN_DAYS_BEFORE_EXPIRY, MAX_DAYS_BEFORE_EXPIRY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = NotificationPrefs::default();
        assert!(prefs.enabled);
        assert_eq!(prefs.days_before_expiry(), 3);
    }

    #[test]
    fn lead_time_is_clamped() {
        assert_eq!(NotificationPrefs::new(true, 0).days_before_expiry(), 1);
        assert_eq!(NotificationPrefs::new(true, 10).days_before_expiry(), 10);
        assert_eq!(NotificationPrefs::new(true, 200).days_before_expiry(), 10);

        let mut prefs = NotificationPrefs::default();
        prefs.set_days_before_expiry(0);
        assert_eq!(prefs.days_before_expiry(), 1);
    }

    #[test]
    fn serde_clamps_out_of_range_stored_values() {
        let prefs: NotificationPrefs =
            serde_json::from_str(r#"{"enabled":false,"daysBeforeExpiry":42}"#).unwrap();
        assert!(!prefs.enabled);
        assert_eq!(prefs.days_before_expiry(), 10);

        let json = serde_json::to_string(&NotificationPrefs::default()).unwrap();
        assert!(json.contains("\"daysBeforeExpiry\":3"));
    }
}
