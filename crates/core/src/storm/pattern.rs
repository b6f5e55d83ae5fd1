//! Daily storm scenario
//!
//! A `DailyPattern` is drawn once per session and then read by the storm model
//! on every slider tick. Randomness is injected so tests and replays can pin
//! the scenario with a seeded generator.

use crate::storm::model::StormModel;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Storm scenario for one simulated day
///
/// Immutable once generated.
///
/// # Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use storm_sim_core::DailyPattern;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let pattern = DailyPattern::generate(&mut rng);
/// assert!((14.0..=17.0).contains(&pattern.storm_peak_hour()));
/// assert!((60..100).contains(&pattern.max_wind_bonus()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPattern {
    /// Hour of day (0-24 scale) at which the storm peaks
    pub(crate) storm_peak_hour: f64,

    /// Extra wind (km/h) the storm adds at full intensity
    pub(crate) max_wind_bonus: u32,

    /// False for calm days with no storm window at all
    pub(crate) has_storm: bool,
}

impl DailyPattern {
    /// Build an exact storm scenario
    #[must_use]
    pub fn new(storm_peak_hour: f64, max_wind_bonus: u32) -> Self {
        DailyPattern {
            storm_peak_hour,
            max_wind_bonus,
            has_storm: true,
        }
    }

    /// A day without a storm; every hour evaluates as outside the storm window
    #[must_use]
    pub fn calm() -> Self {
        DailyPattern {
            storm_peak_hour: 0.0,
            max_wind_bonus: 0,
            has_storm: false,
        }
    }

    /// Draw a scenario with the standard model ranges
    pub fn generate(rng: &mut impl Rng) -> Self {
        StormModel::STANDARD.generate(rng)
    }

    /// Draw a scenario from the thread-local generator
    pub fn generate_from_entropy() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Hour at which the storm peaks
    pub fn storm_peak_hour(&self) -> f64 {
        self.storm_peak_hour
    }

    /// Wind added at peak intensity (km/h)
    pub fn max_wind_bonus(&self) -> u32 {
        self.max_wind_bonus
    }

    /// Whether this day has a storm
    pub fn has_storm(&self) -> bool {
        self.has_storm
    }
}
