//! Weather value types shared by the storm model, readouts and alerts
//!
//! `LocationProfile` is static configuration describing a town's baseline
//! climate. `WeatherState` is the per-tick output of the storm model and is
//! never persisted.

use crate::core_types::units::{Celsius, KilometersPerHour, MillimetersPerHour};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Baseline sky condition for a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// Clear skies
    Sunny,
    /// Overcast
    Cloudy,
    /// Broken cloud
    PartlyCloudy,
    /// Wet season baseline, adds a light drizzle to every reading
    Rainy,
}

impl Condition {
    /// Kebab-case name as used by the dashboard
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::PartlyCloudy => "partly-cloudy",
            Condition::Rainy => "rainy",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Baseline climate of a location
///
/// Profiles are immutable lookup entries. The storm model layers the daily
/// storm on top of `base_wind` and the rainy-day drizzle.
///
/// # Example
/// ```
/// use storm_sim_core::{Condition, LocationProfile};
///
/// let baguio = LocationProfile::new(16, Condition::Rainy, 20);
/// assert_eq!(*baguio.base_wind, 20.0);
/// assert!(baguio.is_rainy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    /// Typical daytime temperature
    pub base_temperature: Celsius,
    /// Typical sky condition
    pub base_condition: Condition,
    /// Background wind speed before any storm contribution
    pub base_wind: KilometersPerHour,
}

impl LocationProfile {
    /// Create a profile from whole-number dashboard values
    #[must_use]
    pub fn new(base_temperature: i32, base_condition: Condition, base_wind: u32) -> Self {
        LocationProfile {
            base_temperature: Celsius::from(base_temperature),
            base_condition,
            base_wind: KilometersPerHour::from(base_wind),
        }
    }

    /// Whether the location sits in a rainy baseline
    pub fn is_rainy(&self) -> bool {
        self.base_condition == Condition::Rainy
    }
}

/// Alert tier, ordered `Clear < Yellow < Orange`
///
/// Used both for the computed status of a weather state and for the manual
/// alert buttons on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    /// Normal conditions
    Clear,
    /// Heavy rain advisory
    Yellow,
    /// Severe thunderstorm emergency
    Orange,
}

impl AlertTier {
    /// All tiers in ascending severity
    pub const ALL: [AlertTier; 3] = [AlertTier::Clear, AlertTier::Yellow, AlertTier::Orange];

    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            AlertTier::Clear => "clear",
            AlertTier::Yellow => "yellow",
            AlertTier::Orange => "orange",
        }
    }

    /// Index into per-tier tables (`Clear` = 0)
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AlertTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name an alert tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTierError(String);

impl fmt::Display for ParseTierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown alert level '{}' (expected clear, yellow or orange)",
            self.0
        )
    }
}

impl std::error::Error for ParseTierError {}

impl FromStr for AlertTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clear" | "normal" | "green" => Ok(AlertTier::Clear),
            "yellow" => Ok(AlertTier::Yellow),
            "orange" => Ok(AlertTier::Orange),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// Weather at one slider position
///
/// Recomputed on every tick from the hour, the daily pattern and the location
/// profile. `alert_tier` depends only on storm intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherState {
    /// Sustained wind speed
    pub wind_speed: KilometersPerHour,
    /// Rainfall rate
    pub rainfall: MillimetersPerHour,
    /// Lightning strikes per minute
    pub lightning_rate: u32,
    /// Alert status derived from storm intensity
    pub alert_tier: AlertTier,
}

impl WeatherState {
    /// Baseline readings for a profile with no storm contribution
    #[must_use]
    pub fn baseline(profile: &LocationProfile, rainy_drizzle: MillimetersPerHour) -> Self {
        WeatherState {
            wind_speed: profile.base_wind,
            rainfall: if profile.is_rainy() {
                rainy_drizzle
            } else {
                MillimetersPerHour::ZERO
            },
            lightning_rate: 0,
            alert_tier: AlertTier::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(AlertTier::Clear < AlertTier::Yellow);
        assert!(AlertTier::Yellow < AlertTier::Orange);
        assert_eq!(AlertTier::ALL.iter().max(), Some(&AlertTier::Orange));
        assert_eq!(AlertTier::Orange.index(), 2);
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!("Yellow".parse::<AlertTier>(), Ok(AlertTier::Yellow));
        assert_eq!(" orange ".parse::<AlertTier>(), Ok(AlertTier::Orange));
        assert_eq!("normal".parse::<AlertTier>(), Ok(AlertTier::Clear));

        let err = "red".parse::<AlertTier>().unwrap_err();
        assert!(err.to_string().contains("'red'"));
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        let json = serde_json::to_string(&AlertTier::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
        let back: AlertTier = serde_json::from_str("\"yellow\"").unwrap();
        assert_eq!(back, AlertTier::Yellow);
    }

    #[test]
    fn test_condition_names() {
        assert_eq!(Condition::PartlyCloudy.to_string(), "partly-cloudy");
        let json = serde_json::to_string(&Condition::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly-cloudy\"");
    }

    #[test]
    fn test_baseline_rainy_drizzle() {
        let drizzle = MillimetersPerHour::new(5.0);

        let wet = LocationProfile::new(16, Condition::Rainy, 20);
        let state = WeatherState::baseline(&wet, drizzle);
        assert_eq!(*state.rainfall, 5.0);
        assert_eq!(*state.wind_speed, 20.0);
        assert_eq!(state.lightning_rate, 0);
        assert_eq!(state.alert_tier, AlertTier::Clear);

        let dry = LocationProfile::new(33, Condition::Sunny, 15);
        assert_eq!(*WeatherState::baseline(&dry, drizzle).rainfall, 0.0);
    }
}
