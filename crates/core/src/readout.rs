//! Dashboard readout for a weather state
//!
//! Formats a [`WeatherState`] the way the telemetry panel shows it: whole
//! numbers for wind and rain, a lightning meter capped at 100%, and a status
//! badge.

use crate::core_types::weather::{AlertTier, WeatherState};
use serde::{Deserialize, Serialize};

/// Rain layer opacity for a tier
pub fn rain_layer_opacity(tier: AlertTier) -> f64 {
    match tier {
        AlertTier::Clear => 0.0,
        AlertTier::Yellow => 0.5,
        AlertTier::Orange => 1.0,
    }
}

/// Status badge text for a tier
pub fn badge_text(tier: AlertTier) -> &'static str {
    match tier {
        AlertTier::Clear => "🟢 NORMAL",
        AlertTier::Yellow => "⚠️ YELLOW WARNING",
        AlertTier::Orange => "🚨 ORANGE ALERT",
    }
}

/// Formatted telemetry panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    /// Wind speed, floored, e.g. `45 km/h`
    pub wind: String,
    /// Rainfall, floored, e.g. `12 mm/h`
    pub rainfall: String,
    /// Strike rate, e.g. `30 strikes/min`
    pub lightning: String,
    /// Lightning meter fill, percent of width
    pub meter_percent: u32,
    /// Status badge text for the tier
    pub badge: String,
    pub tier: AlertTier,
    /// Rain overlay opacity in `[0, 1]`
    pub rain_opacity: f64,
}

impl Readout {
    /// Format a weather state
    pub fn from_state(state: &WeatherState) -> Self {
        Readout {
            wind: format!("{} km/h", state.wind_speed.floor()),
            rainfall: format!("{} mm/h", state.rainfall.floor()),
            lightning: format!("{} strikes/min", state.lightning_rate),
            meter_percent: state.lightning_rate.saturating_mul(2).min(100),
            badge: badge_text(state.alert_tier).to_string(),
            tier: state.alert_tier,
            rain_opacity: rain_layer_opacity(state.alert_tier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{KilometersPerHour, MillimetersPerHour};

    fn state(wind: f64, rain: f64, lightning: u32, tier: AlertTier) -> WeatherState {
        WeatherState {
            wind_speed: KilometersPerHour::new(wind),
            rainfall: MillimetersPerHour::new(rain),
            lightning_rate: lightning,
            alert_tier: tier,
        }
    }

    #[test]
    fn test_peak_readout() {
        let readout = Readout::from_state(&state(92.0, 60.0, 50, AlertTier::Orange));
        assert_eq!(readout.wind, "92 km/h");
        assert_eq!(readout.rainfall, "60 mm/h");
        assert_eq!(readout.lightning, "50 strikes/min");
        assert_eq!(readout.meter_percent, 100);
        assert_eq!(readout.badge, "🚨 ORANGE ALERT");
        assert_eq!(readout.rain_opacity, 1.0);
    }

    #[test]
    fn test_values_are_floored() {
        let readout = Readout::from_state(&state(9.317, 0.0, 0, AlertTier::Clear));
        assert_eq!(readout.wind, "9 km/h");
        assert_eq!(readout.rainfall, "0 mm/h");
        assert_eq!(readout.meter_percent, 0);
        assert_eq!(readout.badge, "🟢 NORMAL");
    }

    #[test]
    fn test_meter_scales_below_cap() {
        let readout = Readout::from_state(&state(40.0, 20.0, 16, AlertTier::Yellow));
        assert_eq!(readout.meter_percent, 32);
        assert_eq!(readout.badge, "⚠️ YELLOW WARNING");
        assert_eq!(readout.rain_opacity, 0.5);
    }
}
