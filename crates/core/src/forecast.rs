//! Seven-day outlook cards
//!
//! Cards are jittered around the location's base temperature. Highs sit at or
//! up to two degrees above the base, lows two to five degrees below it.

use crate::core_types::units::Celsius;
use crate::core_types::weather::LocationProfile;
use chrono::{Datelike, Local, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cards in the outlook
pub const FORECAST_DAYS: usize = 7;

/// Icon shown on a forecast card, picked from the base temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForecastIcon {
    /// Cool highland climate (base below 20°)
    Rain,
    /// Hot lowland climate (base above 32°)
    Sun,
    /// Everything in between
    PartlyCloudy,
}

impl ForecastIcon {
    /// Icon for a base temperature
    pub fn for_base(base: Celsius) -> Self {
        if *base < 20.0 {
            ForecastIcon::Rain
        } else if *base > 32.0 {
            ForecastIcon::Sun
        } else {
            ForecastIcon::PartlyCloudy
        }
    }

    /// Emoji used on the card
    pub fn emoji(self) -> &'static str {
        match self {
            ForecastIcon::Rain => "🌧️",
            ForecastIcon::Sun => "☀️",
            ForecastIcon::PartlyCloudy => "⛅",
        }
    }
}

/// One day of the outlook
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Day of the week
    pub weekday: Weekday,
    /// Afternoon high
    pub high: Celsius,
    /// Overnight low
    pub low: Celsius,
    /// Card icon
    pub icon: ForecastIcon,
}

impl ForecastDay {
    /// Card text, e.g. `Mon ⛅ 33° / 27°`
    pub fn label(&self) -> String {
        format!(
            "{} {} {} / {}",
            self.weekday,
            self.icon.emoji(),
            self.high,
            self.low
        )
    }
}

/// Seven cards starting on `start`
pub fn seven_day_forecast(
    profile: &LocationProfile,
    start: Weekday,
    rng: &mut impl Rng,
) -> Vec<ForecastDay> {
    let base = profile.base_temperature;
    let icon = ForecastIcon::for_base(base);

    let mut weekday = start;
    let mut days = Vec::with_capacity(FORECAST_DAYS);
    for _ in 0..FORECAST_DAYS {
        let high = base.offset(rng.random_range(0..3));
        let low = base.offset(-rng.random_range(0..4) - 2);
        days.push(ForecastDay {
            weekday,
            high,
            low,
            icon,
        });
        weekday = weekday.succ();
    }
    days
}

/// Seven cards starting today (local time)
pub fn forecast_from_today(profile: &LocationProfile, rng: &mut impl Rng) -> Vec<ForecastDay> {
    seven_day_forecast(profile, Local::now().weekday(), rng)
}
