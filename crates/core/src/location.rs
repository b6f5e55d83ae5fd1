//! Location list and baseline climate lookup
//!
//! Every recognised town maps to one [`LocationProfile`]; anything else
//! (including towns on the selector list without a dedicated profile) falls
//! back to the `default` profile.

use crate::core_types::weather::{Condition, LocationProfile};
use rustc_hash::FxHashMap;

/// Location selected when a session starts
pub const DEFAULT_LOCATION: &str = "Angeles City, Pampanga";

/// Towns offered by the location selector
pub const LOCATIONS: [&str; 9] = [
    "Angeles City, Pampanga",
    "San Fernando, Pampanga",
    "Mabalacat, Pampanga",
    "Manila, Metro Manila",
    "Quezon City, Metro Manila",
    "Baguio City, Benguet",
    "Tagaytay City, Cavite",
    "Cebu City, Cebu",
    "Davao City, Davao del Sur",
];

/// Town name without its province (`"Cebu City, Cebu"` → `"Cebu City"`)
pub fn short_name(location: &str) -> &str {
    location
        .split_once(',')
        .map_or(location, |(town, _province)| town)
}

/// Static table of location profiles
///
/// # Example
/// ```
/// use storm_sim_core::{Condition, LocationRegistry};
///
/// let registry = LocationRegistry::builtin();
/// assert_eq!(registry.profile("Baguio City, Benguet").base_condition, Condition::Rainy);
///
/// // Unknown towns use the default profile
/// assert_eq!(registry.profile("Atlantis"), registry.fallback());
/// ```
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    profiles: FxHashMap<String, LocationProfile>,
    fallback: LocationProfile,
    locations: Vec<String>,
}

impl LocationRegistry {
    /// Profiles used by the dashboard
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = LocationRegistry::new(
            LocationProfile::new(31, Condition::Cloudy, 12),
            LOCATIONS.iter().map(ToString::to_string),
        );
        registry.insert(
            "Baguio City, Benguet",
            LocationProfile::new(16, Condition::Rainy, 20),
        );
        registry.insert(
            "Tagaytay City, Cavite",
            LocationProfile::new(24, Condition::Cloudy, 25),
        );
        registry.insert(
            "Manila, Metro Manila",
            LocationProfile::new(33, Condition::Sunny, 15),
        );
        registry.insert(
            "Davao City, Davao del Sur",
            LocationProfile::new(31, Condition::PartlyCloudy, 10),
        );
        registry.insert(
            "Cebu City, Cebu",
            LocationProfile::new(30, Condition::Sunny, 18),
        );
        registry
    }

    /// Empty registry with a fallback profile and a selector list
    pub fn new(fallback: LocationProfile, locations: impl IntoIterator<Item = String>) -> Self {
        LocationRegistry {
            profiles: FxHashMap::default(),
            fallback,
            locations: locations.into_iter().collect(),
        }
    }

    /// Register (or replace) the profile for a location
    pub fn insert(&mut self, name: impl Into<String>, profile: LocationProfile) {
        let name = name.into();
        if !self.locations.contains(&name) {
            self.locations.push(name.clone());
        }
        self.profiles.insert(name, profile);
    }

    /// Profile for a location, falling back to the default profile
    pub fn profile(&self, name: &str) -> &LocationProfile {
        self.lookup(name).unwrap_or(&self.fallback)
    }

    /// Dedicated profile for a location, if it has one
    pub fn lookup(&self, name: &str) -> Option<&LocationProfile> {
        self.profiles.get(name)
    }

    /// Profile used for unrecognised locations
    pub fn fallback(&self) -> &LocationProfile {
        &self.fallback
    }

    /// Whether the location is on the selector list
    pub fn is_known(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l == name)
    }

    /// Selector list in declaration order
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Selector order: the default location first, then the rest alphabetically
    pub fn selector_order(&self) -> Vec<&str> {
        let mut rest: Vec<&str> = self
            .locations
            .iter()
            .map(String::as_str)
            .filter(|l| *l != DEFAULT_LOCATION)
            .collect();
        rest.sort_unstable();

        let mut ordered = Vec::with_capacity(rest.len() + 1);
        ordered.push(DEFAULT_LOCATION);
        ordered.extend(rest);
        ordered
    }

    /// Case-insensitive match on the full name or its short town name
    pub fn find(&self, query: &str) -> Option<&str> {
        let query = query.trim().to_lowercase();
        self.locations
            .iter()
            .find(|l| l.to_lowercase() == query || short_name(l).to_lowercase() == query)
            .map(String::as_str)
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles() {
        let registry = LocationRegistry::builtin();

        let manila = registry.profile("Manila, Metro Manila");
        assert_eq!(*manila.base_temperature, 33.0);
        assert_eq!(manila.base_condition, Condition::Sunny);
        assert_eq!(*manila.base_wind, 15.0);

        let tagaytay = registry.profile("Tagaytay City, Cavite");
        assert_eq!(*tagaytay.base_wind, 25.0);
    }

    #[test]
    fn test_fallback_profile() {
        let registry = LocationRegistry::builtin();

        // On the selector list but without a dedicated profile
        assert!(registry.is_known(DEFAULT_LOCATION));
        assert!(registry.lookup(DEFAULT_LOCATION).is_none());
        assert_eq!(registry.profile(DEFAULT_LOCATION), registry.fallback());

        // Not on the list at all
        assert!(!registry.is_known("Iloilo City, Iloilo"));
        let fallback = registry.profile("Iloilo City, Iloilo");
        assert_eq!(*fallback.base_temperature, 31.0);
        assert_eq!(fallback.base_condition, Condition::Cloudy);
        assert_eq!(*fallback.base_wind, 12.0);
    }

    #[test]
    fn test_selector_order() {
        let registry = LocationRegistry::builtin();
        let order = registry.selector_order();

        assert_eq!(order.len(), LOCATIONS.len());
        assert_eq!(order[0], DEFAULT_LOCATION);
        assert_eq!(order[1], "Baguio City, Benguet");
        assert_eq!(order[order.len() - 1], "Tagaytay City, Cavite");

        let tail = &order[1..];
        assert!(tail.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("Cebu City, Cebu"), "Cebu City");
        assert_eq!(short_name("Davao City, Davao del Sur"), "Davao City");
        assert_eq!(short_name("Somewhere"), "Somewhere");
    }

    #[test]
    fn test_find() {
        let registry = LocationRegistry::builtin();
        assert_eq!(registry.find("baguio city"), Some("Baguio City, Benguet"));
        assert_eq!(
            registry.find("MANILA, METRO MANILA"),
            Some("Manila, Metro Manila")
        );
        assert_eq!(registry.find("Atlantis"), None);
    }

    #[test]
    fn test_insert_extends_selector() {
        let mut registry = LocationRegistry::builtin();
        registry.insert("Iloilo City, Iloilo", LocationProfile::new(32, Condition::Sunny, 14));
        assert!(registry.is_known("Iloilo City, Iloilo"));
        assert_eq!(registry.locations().len(), LOCATIONS.len() + 1);
    }
}
