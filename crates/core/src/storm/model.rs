//! Storm intensity model
//!
//! Converts a slider hour into wind, rain, lightning and an alert tier.
//!
//! The storm is a triangular pulse centred on the daily peak hour:
//!
//! ```text
//! intensity(d) = 1 - d / W     for d < W
//!              = none          otherwise
//! ```
//!
//! where `d = |hour - peak|` and `W` is the storm window half-width (1.5 h).
//! Inside the window wind, rain and lightning scale linearly with intensity.
//! Outside it the wind carries a small `sin(hour)` wobble so the calm part of
//! the day is not a flat line.
//!
//! Tier thresholds are strict (`> 0.8` orange, `> 0.4` yellow) with no
//! hysteresis. A slider resting exactly on a threshold reports the lower tier.

use crate::core_types::units::{KilometersPerHour, MillimetersPerHour};
use crate::core_types::weather::{AlertTier, LocationProfile, WeatherState};
use crate::simulation::config::ConfigError;
use crate::storm::pattern::DailyPattern;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Tunable constants of the storm model
///
/// `StormModel::STANDARD` reproduces the dashboard behaviour. Config files can
/// override individual fields; missing fields keep their standard value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StormModel {
    /// Earliest storm peak hour drawn by the generator (inclusive)
    pub peak_hour_min: u32,
    /// Latest storm peak hour drawn by the generator (inclusive)
    pub peak_hour_max: u32,
    /// Smallest wind bonus drawn by the generator (inclusive, km/h)
    pub wind_bonus_min: u32,
    /// Upper bound of the wind bonus draw (exclusive, km/h)
    pub wind_bonus_max: u32,
    /// Half-width of the storm window in hours
    pub storm_window_hours: f64,
    /// Rainfall added at full intensity (mm/h)
    pub peak_rainfall: f64,
    /// Lightning rate at full intensity (strikes/min)
    pub peak_lightning: f64,
    /// Intensity strictly above this is orange
    pub orange_threshold: f64,
    /// Intensity strictly above this (and not orange) is yellow
    pub yellow_threshold: f64,
    /// Background rainfall for rainy-baseline locations (mm/h)
    pub rainy_drizzle: f64,
    /// Amplitude of the calm-hours wind wobble (km/h)
    pub calm_oscillation: f64,
}

impl StormModel {
    /// Dashboard defaults
    pub const STANDARD: StormModel = StormModel {
        peak_hour_min: 14,
        peak_hour_max: 17,
        wind_bonus_min: 60,
        wind_bonus_max: 100,
        storm_window_hours: 1.5,
        peak_rainfall: 60.0,
        peak_lightning: 50.0,
        orange_threshold: 0.8,
        yellow_threshold: 0.4,
        rainy_drizzle: 5.0,
        calm_oscillation: 5.0,
    };

    /// Draw a daily storm scenario
    ///
    /// Peak hour is uniform over the whole hours `peak_hour_min..=peak_hour_max`,
    /// wind bonus uniform over `wind_bonus_min..wind_bonus_max`.
    ///
    /// # Panics
    /// Panics if the ranges are empty; `validate` rejects such models.
    pub fn generate(&self, rng: &mut impl Rng) -> DailyPattern {
        let pattern = self.draw(rng);
        info!(
            "Simulation generated: storm hitting at {}:00 (max wind bonus {} km/h)",
            pattern.storm_peak_hour, pattern.max_wind_bonus
        );
        pattern
    }

    /// Same draw as [`StormModel::generate`] without logging, for bulk runs
    ///
    /// # Panics
    /// Panics if the ranges are empty; `validate` rejects such models.
    pub fn draw(&self, rng: &mut impl Rng) -> DailyPattern {
        let peak = rng.random_range(self.peak_hour_min..=self.peak_hour_max);
        let bonus = rng.random_range(self.wind_bonus_min..self.wind_bonus_max);
        DailyPattern::new(f64::from(peak), bonus)
    }

    /// Storm intensity at `distance` hours from the peak
    ///
    /// Returns `None` outside the storm window (including exactly on its edge).
    pub fn storm_intensity(&self, distance: f64) -> Option<f64> {
        if distance < self.storm_window_hours {
            Some(1.0 - distance / self.storm_window_hours)
        } else {
            None
        }
    }

    /// Storm intensity at `distance`, 0.0 outside the window
    pub fn intensity(&self, distance: f64) -> f64 {
        self.storm_intensity(distance).unwrap_or(0.0)
    }

    /// Intensity at a slider hour for the given day, `None` if outside the window
    pub fn intensity_at(&self, hour: f64, pattern: &DailyPattern) -> Option<f64> {
        if !pattern.has_storm {
            return None;
        }
        self.storm_intensity((hour - pattern.storm_peak_hour).abs())
    }

    /// Map an intensity to its alert tier
    pub fn tier_for(&self, intensity: f64) -> AlertTier {
        if intensity > self.orange_threshold {
            AlertTier::Orange
        } else if intensity > self.yellow_threshold {
            AlertTier::Yellow
        } else {
            AlertTier::Clear
        }
    }

    /// Open interval of hours in which the storm contributes
    pub fn storm_window(&self, pattern: &DailyPattern) -> Option<(f64, f64)> {
        pattern.has_storm.then(|| {
            (
                pattern.storm_peak_hour - self.storm_window_hours,
                pattern.storm_peak_hour + self.storm_window_hours,
            )
        })
    }

    /// Evaluate the weather at `hour`
    ///
    /// Total over every `f64` hour: no clamping or wrapping is applied, so
    /// hours outside `[0, 24)` simply sit far from the peak and take the calm
    /// branch. A NaN hour yields a NaN wind speed and a clear tier.
    pub fn evaluate(
        &self,
        hour: f64,
        pattern: &DailyPattern,
        profile: &LocationProfile,
    ) -> WeatherState {
        let mut state =
            WeatherState::baseline(profile, MillimetersPerHour::new(self.rainy_drizzle));

        if let Some(intensity) = self.intensity_at(hour, pattern) {
            state.wind_speed += KilometersPerHour::from(pattern.max_wind_bonus) * intensity;
            state.rainfall += MillimetersPerHour::new(self.peak_rainfall) * intensity;
            state.lightning_rate = (self.peak_lightning * intensity).floor() as u32;
            state.alert_tier = self.tier_for(intensity);
        } else {
            *state.wind_speed += hour.sin() * self.calm_oscillation;
        }

        state
    }

    /// Check that the generator ranges and thresholds are usable
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.peak_hour_min > self.peak_hour_max {
            return Err(ConfigError::Invalid(format!(
                "peak_hour_min ({}) is after peak_hour_max ({})",
                self.peak_hour_min, self.peak_hour_max
            )));
        }
        if self.peak_hour_max >= 24 {
            return Err(ConfigError::Invalid(format!(
                "peak_hour_max ({}) must be below 24",
                self.peak_hour_max
            )));
        }
        if self.wind_bonus_min >= self.wind_bonus_max {
            return Err(ConfigError::Invalid(format!(
                "wind bonus range {}..{} is empty",
                self.wind_bonus_min, self.wind_bonus_max
            )));
        }
        if self.storm_window_hours <= 0.0 || !self.storm_window_hours.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "storm_window_hours must be positive, got {}",
                self.storm_window_hours
            )));
        }
        if !(0.0..1.0).contains(&self.yellow_threshold)
            || !(self.yellow_threshold..1.0).contains(&self.orange_threshold)
        {
            return Err(ConfigError::Invalid(format!(
                "thresholds must satisfy 0 <= yellow ({}) <= orange ({}) < 1",
                self.yellow_threshold, self.orange_threshold
            )));
        }
        for (name, value) in [
            ("peak_rainfall", self.peak_rainfall),
            ("peak_lightning", self.peak_lightning),
            ("rainy_drizzle", self.rainy_drizzle),
            ("calm_oscillation", self.calm_oscillation),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for StormModel {
    fn default() -> Self {
        StormModel::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::weather::Condition;
    use approx::assert_relative_eq;

    fn cloudy_town() -> LocationProfile {
        LocationProfile::new(31, Condition::Cloudy, 12)
    }

    #[test]
    fn test_peak_hour_is_full_storm() {
        let model = StormModel::STANDARD;
        let pattern = DailyPattern::new(15.0, 80);
        let state = model.evaluate(15.0, &pattern, &cloudy_town());

        assert_eq!(*state.wind_speed, 92.0);
        assert_eq!(*state.rainfall, 60.0);
        assert_eq!(state.lightning_rate, 50);
        assert_eq!(state.alert_tier, AlertTier::Orange);
    }

    #[test]
    fn test_calm_hour_uses_wobble() {
        let model = StormModel::STANDARD;
        let pattern = DailyPattern::new(15.0, 80);
        let state = model.evaluate(12.0, &pattern, &cloudy_town());

        assert_relative_eq!(*state.wind_speed, 12.0 + 12.0_f64.sin() * 5.0);
        assert_relative_eq!(*state.wind_speed, 9.317, epsilon = 1e-3);
        assert_eq!(*state.rainfall, 0.0);
        assert_eq!(state.lightning_rate, 0);
        assert_eq!(state.alert_tier, AlertTier::Clear);
    }

    #[test]
    fn test_storm_tail() {
        let model = StormModel::STANDARD;
        let pattern = DailyPattern::new(15.0, 80);
        let state = model.evaluate(16.25, &pattern, &cloudy_town());

        let intensity = 1.0 - 1.25 / 1.5;
        assert_relative_eq!(*state.wind_speed, 12.0 + 80.0 * intensity);
        assert_relative_eq!(*state.rainfall, 60.0 * intensity);
        assert_eq!(state.lightning_rate, 8);
        assert_eq!(state.alert_tier, AlertTier::Clear);
    }

    #[test]
    fn test_window_edge_is_outside() {
        let model = StormModel::STANDARD;
        assert_eq!(model.storm_intensity(1.5), None);
        assert_eq!(model.intensity(1.5), 0.0);

        let pattern = DailyPattern::new(15.0, 80);
        let state = model.evaluate(16.5, &pattern, &cloudy_town());
        assert_eq!(state.alert_tier, AlertTier::Clear);
        assert_eq!(state.lightning_rate, 0);
        assert_relative_eq!(*state.wind_speed, 12.0 + 16.5_f64.sin() * 5.0);
    }

    #[test]
    fn test_half_hour_steps_around_peak() {
        let model = StormModel::STANDARD;
        let pattern = DailyPattern::new(16.0, 70);
        let town = cloudy_town();

        let tiers: Vec<AlertTier> = [14.5, 15.0, 15.5, 16.0, 16.5, 17.0, 17.5]
            .iter()
            .map(|h| model.evaluate(*h, &pattern, &town).alert_tier)
            .collect();

        assert_eq!(
            tiers,
            vec![
                AlertTier::Clear,
                AlertTier::Clear,
                AlertTier::Yellow,
                AlertTier::Orange,
                AlertTier::Yellow,
                AlertTier::Clear,
                AlertTier::Clear,
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let model = StormModel::STANDARD;
        assert_eq!(model.tier_for(0.8), AlertTier::Yellow);
        assert_eq!(model.tier_for(0.800_001), AlertTier::Orange);
        assert_eq!(model.tier_for(0.4), AlertTier::Clear);
        assert_eq!(model.tier_for(0.400_001), AlertTier::Yellow);
    }

    #[test]
    fn test_rainy_baseline_adds_drizzle() {
        let model = StormModel::STANDARD;
        let baguio = LocationProfile::new(16, Condition::Rainy, 20);
        let pattern = DailyPattern::new(14.0, 60);

        assert_eq!(*model.evaluate(8.0, &pattern, &baguio).rainfall, 5.0);
        assert_eq!(*model.evaluate(14.0, &pattern, &baguio).rainfall, 65.0);
    }

    #[test]
    fn test_calm_day_never_storms() {
        let model = StormModel::STANDARD;
        let calm = DailyPattern::calm();
        assert_eq!(model.storm_window(&calm), None);

        for step in 0..48 {
            let hour = f64::from(step) * 0.5;
            let state = model.evaluate(hour, &calm, &cloudy_town());
            assert_eq!(state.alert_tier, AlertTier::Clear);
            assert_eq!(state.lightning_rate, 0);
        }
    }

    #[test]
    fn test_out_of_range_hours_are_total() {
        let model = StormModel::STANDARD;
        let pattern = DailyPattern::new(15.0, 80);
        let town = cloudy_town();

        let late = model.evaluate(39.0, &pattern, &town);
        assert_eq!(late.alert_tier, AlertTier::Clear);
        assert_relative_eq!(*late.wind_speed, 12.0 + 39.0_f64.sin() * 5.0);

        let early = model.evaluate(-3.0, &pattern, &town);
        assert_eq!(early.alert_tier, AlertTier::Clear);

        let nan = model.evaluate(f64::NAN, &pattern, &town);
        assert_eq!(nan.alert_tier, AlertTier::Clear);
        assert!(nan.wind_speed.is_nan());
    }

    #[test]
    fn test_storm_window() {
        let model = StormModel::STANDARD;
        let window = model.storm_window(&DailyPattern::new(17.0, 90));
        assert_eq!(window, Some((15.5, 18.5)));
    }

    #[test]
    fn test_validate() {
        assert!(StormModel::STANDARD.validate().is_ok());

        let inverted = StormModel {
            peak_hour_min: 18,
            ..StormModel::STANDARD
        };
        assert!(inverted.validate().is_err());

        let empty_bonus = StormModel {
            wind_bonus_min: 100,
            ..StormModel::STANDARD
        };
        assert!(empty_bonus.validate().is_err());

        let crossed = StormModel {
            yellow_threshold: 0.9,
            ..StormModel::STANDARD
        };
        let err = crossed.validate().unwrap_err();
        assert!(err.to_string().contains("thresholds"));

        let zero_window = StormModel {
            storm_window_hours: 0.0,
            ..StormModel::STANDARD
        };
        assert!(zero_window.validate().is_err());
    }
}
