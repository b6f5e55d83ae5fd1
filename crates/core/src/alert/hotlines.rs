//! Emergency hotline directory
//!
//! Local disaster-response numbers quoted in alert bulletins. Towns without an
//! entry get the national emergency number.

use rustc_hash::FxHashMap;

/// Hotline text used when a town has no entry
pub const NATIONAL_HOTLINE: &str = "National Emergency: 911";

/// Hotline text per location
#[derive(Debug, Clone, Default)]
pub struct HotlineDirectory {
    entries: FxHashMap<String, String>,
}

impl HotlineDirectory {
    /// Directory shipped with the dashboard
    #[must_use]
    pub fn builtin() -> Self {
        let mut directory = HotlineDirectory::default();
        for (location, lines) in [
            (
                "Angeles City, Pampanga",
                "• Angeles CDRRMO: (045) 322-7796\n• Pampanga PDRRMO: (045) 961-0414\n• Police: 166",
            ),
            (
                "City of San Fernando, Pampanga",
                "• San Fernando Rescue: (045) 961-1422\n• Pampanga PDRRMO: (045) 961-0414",
            ),
            (
                "San Fernando, Pampanga",
                "• San Fernando Rescue: (045) 961-1422\n• Pampanga PDRRMO: (045) 961-0414",
            ),
            (
                "Mabalacat City, Pampanga",
                "• Mabalacat CDRRMO: (045) 331-0000\n• Pampanga PDRRMO: (045) 961-0414",
            ),
            (
                "Manila, Metro Manila",
                "• Manila DRRMO: (02) 8527-5174\n• MMDA: 136\n• Red Cross: 143",
            ),
            (
                "Quezon City, Metro Manila",
                "• QC DRRMO: 122\n• National Emergency: 911",
            ),
            (
                "Baguio City, Benguet",
                "• Baguio CDRRMO: (074) 442-1900\n• Police: 166",
            ),
            (
                "Tagaytay City, Cavite",
                "• Tagaytay CDRRMO: (046) 483-0000\n• Cavite PDRRMO: (046) 419-1919",
            ),
            (
                "Cebu City, Cebu",
                "• Cebu CDRRMO: (032) 255-0000\n• ERUF: 161",
            ),
            (
                "Davao City, Davao del Sur",
                "• Davao Central 911: 911\n• Police: (082) 224-1313",
            ),
        ] {
            directory.insert(location, lines);
        }
        directory
    }

    /// Add or replace the hotlines for a location
    pub fn insert(&mut self, location: impl Into<String>, lines: impl Into<String>) {
        self.entries.insert(location.into(), lines.into());
    }

    /// Hotline text for a location, or the national number
    pub fn hotlines(&self, location: &str) -> &str {
        self.entries
            .get(location)
            .map_or(NATIONAL_HOTLINE, String::as_str)
    }

    /// Number of locations with dedicated hotlines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
