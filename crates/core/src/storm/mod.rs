//! Storm scenario generation and intensity evaluation
//!
//! The daily pattern generator draws a storm peak for the session; the model
//! turns a slider hour plus that pattern into a [`WeatherState`].

pub mod model;
pub mod pattern;

pub use model::StormModel;
pub use pattern::DailyPattern;

use crate::core_types::weather::{LocationProfile, WeatherState};
use rand::Rng;

/// Draw a daily storm scenario with the standard model ranges
pub fn generate(rng: &mut impl Rng) -> DailyPattern {
    DailyPattern::generate(rng)
}

/// Evaluate the weather at `hour` with the standard model constants
///
/// Callers resolve unknown locations to the default profile before calling.
pub fn evaluate(hour: f64, pattern: &DailyPattern, profile: &LocationProfile) -> WeatherState {
    StormModel::STANDARD.evaluate(hour, pattern, profile)
}
