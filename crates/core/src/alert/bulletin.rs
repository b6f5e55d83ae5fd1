//! Alert bulletin text
//!
//! Builds the subject line and body that the alert backend sends to each
//! registered user. Delivery itself happens outside this crate.

use crate::alert::hotlines::HotlineDirectory;
use crate::core_types::weather::AlertTier;
use crate::location::DEFAULT_LOCATION;
use serde::{Deserialize, Serialize};

/// Sender name shown in bulletin subjects
pub const BULLETIN_SENDER: &str = "ACSCI-gurado";

/// Subject and body for one alert broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertBulletin {
    /// Alert level being broadcast
    pub level: AlertTier,
    /// Location the alert is for
    pub location: String,
    /// Subject line
    pub subject: String,
    /// Message body without greeting
    pub body: String,
}

impl AlertBulletin {
    /// Compose a bulletin for `location`
    ///
    /// A missing location defaults to the dashboard's starting town. Returns
    /// `None` for `Clear`; the backend ignores such requests.
    pub fn compose(
        level: AlertTier,
        location: Option<&str>,
        directory: &HotlineDirectory,
    ) -> Option<Self> {
        let location = location.unwrap_or(DEFAULT_LOCATION);
        let hotlines = directory.hotlines(location);
        let loud_location = location.to_uppercase();

        let (subject, body) = match level {
            AlertTier::Clear => return None,
            AlertTier::Yellow => (
                format!("⚠️ {BULLETIN_SENDER}: YELLOW WARNING ({location})"),
                format!(
                    "WARNING: Heavy rain detected in {location}.\n\
                     Flooding is possible in low-lying areas.\n\n\
                     PRECAUTIONARY MEASURES:\n\
                     - Monitor local news.\n\
                     - Prepare emergency kit.\n\n\
                     EMERGENCY HOTLINES FOR {loud_location}:\n\
                     {hotlines}"
                ),
            ),
            AlertTier::Orange => (
                format!("🚨 {BULLETIN_SENDER}: ORANGE WARNING ({location})"),
                format!(
                    "EMERGENCY: Severe thunderstorm imminent in {location}. Evacuate immediately.\n\
                     Proceed to a nearby evacuation zone.\n\n\
                     For emergency contact these hotlines of {loud_location}:\n\
                     {hotlines}"
                ),
            ),
        };

        Some(AlertBulletin {
            level,
            location: location.to_string(),
            subject,
            body,
        })
    }

    /// Body with a greeting for one recipient
    pub fn personalize(&self, name: &str) -> String {
        format!("Hello {name},\n\n{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_is_ignored() {
        let directory = HotlineDirectory::builtin();
        assert!(AlertBulletin::compose(AlertTier::Clear, Some("Cebu City, Cebu"), &directory)
            .is_none());
    }

    #[test]
    fn test_yellow_bulletin() {
        let directory = HotlineDirectory::builtin();
        let bulletin =
            AlertBulletin::compose(AlertTier::Yellow, Some("Cebu City, Cebu"), &directory)
                .unwrap();

        assert_eq!(
            bulletin.subject,
            "⚠️ ACSCI-gurado: YELLOW WARNING (Cebu City, Cebu)"
        );
        assert!(bulletin
            .body
            .starts_with("WARNING: Heavy rain detected in Cebu City, Cebu.\n"));
        assert!(bulletin
            .body
            .contains("EMERGENCY HOTLINES FOR CEBU CITY, CEBU:\n• Cebu CDRRMO"));
        assert!(bulletin.body.ends_with("• ERUF: 161"));
    }

    #[test]
    fn test_orange_bulletin_defaults_location() {
        let directory = HotlineDirectory::builtin();
        let bulletin = AlertBulletin::compose(AlertTier::Orange, None, &directory).unwrap();

        assert_eq!(bulletin.location, DEFAULT_LOCATION);
        assert_eq!(
            bulletin.subject,
            "🚨 ACSCI-gurado: ORANGE WARNING (Angeles City, Pampanga)"
        );
        assert!(bulletin.body.contains("Evacuate immediately.\n"));
        assert!(bulletin.body.contains("Angeles CDRRMO"));
    }

    #[test]
    fn test_unknown_location_uses_national_hotline() {
        let directory = HotlineDirectory::builtin();
        let bulletin =
            AlertBulletin::compose(AlertTier::Orange, Some("Mabalacat, Pampanga"), &directory)
                .unwrap();
        assert!(bulletin.body.ends_with("National Emergency: 911"));
    }

    #[test]
    fn test_personalize() {
        let directory = HotlineDirectory::builtin();
        let bulletin =
            AlertBulletin::compose(AlertTier::Yellow, Some("Manila, Metro Manila"), &directory)
                .unwrap();
        let text = bulletin.personalize("Maria");
        assert!(text.starts_with("Hello Maria,\n\nWARNING:"));
    }
}
