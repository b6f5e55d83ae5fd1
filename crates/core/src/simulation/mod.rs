//! Dashboard session
//!
//! A [`Session`] is the explicit context the dashboard works against: one
//! generated storm day, the selected location and the slider position. Every
//! read recomputes the weather from those three values, so there is no cached
//! state to go stale.

pub mod config;
pub mod ensemble;

pub use config::{ConfigError, SimulationConfig};
pub use ensemble::{ensemble_outlook, EnsembleOutlook};

use crate::alert::{AlertBulletin, AlertDialog, HotlineDirectory, ManualAlert, SceneEffects};
use crate::api::TriggerAlertRequest;
use crate::clock::{format_hour, slider_hours};
use crate::core_types::weather::{AlertTier, LocationProfile, WeatherState};
use crate::forecast::{forecast_from_today, ForecastDay};
use crate::location::LocationRegistry;
use crate::readout::Readout;
use crate::storm::{DailyPattern, StormModel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Errors raised by session operations
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Slider input was NaN or infinite
    InvalidHour(f64),
    /// Configuration could not be used
    Config(ConfigError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidHour(hour) => {
                write!(f, "Invalid slider hour {hour}: expected a finite number")
            }
            SessionError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Config(err) => Some(err),
            SessionError::InvalidHour(_) => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        SessionError::Config(err)
    }
}

/// One dashboard session
///
/// # Example
/// ```
/// use storm_sim_core::{AlertTier, DailyPattern, Session, SimulationConfig};
///
/// let mut session =
///     Session::with_pattern(SimulationConfig::default(), DailyPattern::new(15.0, 80)).unwrap();
/// let state = session.set_hour(15.0).unwrap();
/// assert_eq!(state.alert_tier, AlertTier::Orange);
/// assert_eq!(session.clock_label(), "3:00 PM");
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    model: StormModel,
    registry: LocationRegistry,
    hotlines: HotlineDirectory,
    pattern: DailyPattern,
    location: String,
    hour: f64,
    last_tier: AlertTier,
}

impl Session {
    /// Start a session, drawing the day's storm from `rng`
    ///
    /// A fixed `pattern` in the config skips the draw.
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the config fails validation
    pub fn new(config: SimulationConfig, rng: &mut impl Rng) -> Result<Self, SessionError> {
        config.validate()?;
        let pattern = config
            .pattern
            .unwrap_or_else(|| config.model.generate(rng));
        Ok(Self::build(config, pattern))
    }

    /// Start a session from the config's seed, or from entropy when unset
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the config fails validation
    pub fn from_config(config: SimulationConfig) -> Result<Self, SessionError> {
        match config.seed {
            Some(seed) => Self::new(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::new(config, &mut rand::rng()),
        }
    }

    /// Start a session on an exact storm scenario
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the config fails validation
    pub fn with_pattern(
        config: SimulationConfig,
        pattern: DailyPattern,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self::build(config, pattern))
    }

    fn build(config: SimulationConfig, pattern: DailyPattern) -> Self {
        let registry = LocationRegistry::builtin();
        if !registry.is_known(&config.default_location) {
            warn!(
                "Default location '{}' is not on the selector list, using fallback profile",
                config.default_location
            );
        }

        let mut session = Session {
            model: config.model,
            registry,
            hotlines: HotlineDirectory::builtin(),
            pattern,
            location: config.default_location,
            hour: config.initial_hour,
            last_tier: AlertTier::Clear,
        };
        session.last_tier = session.current().alert_tier;
        info!(
            "Session started at {} ({})",
            session.location,
            session.clock_label()
        );
        session
    }

    /// Storm model in use
    pub fn model(&self) -> &StormModel {
        &self.model
    }

    /// Location table
    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    /// Hotlines quoted in bulletins
    pub fn hotlines(&self) -> &HotlineDirectory {
        &self.hotlines
    }

    /// Today's storm scenario
    pub fn pattern(&self) -> &DailyPattern {
        &self.pattern
    }

    /// Selected location
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Slider position in hours, always within `[0, 24)`
    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// Profile of the selected location
    pub fn profile(&self) -> &LocationProfile {
        self.registry.profile(&self.location)
    }

    /// Hours in which today's storm contributes
    pub fn storm_window(&self) -> Option<(f64, f64)> {
        self.model.storm_window(&self.pattern)
    }

    /// Switch location; unknown names use the fallback profile
    pub fn set_location(&mut self, name: &str) -> WeatherState {
        if !self.registry.is_known(name) {
            warn!("Unknown location '{}', using fallback profile", name);
        }
        self.location = name.to_string();
        info!("Location changed to {}", self.location);

        let state = self.current();
        self.track_tier(state.alert_tier);
        state
    }

    /// Move the slider
    ///
    /// Finite hours wrap into `[0, 24)`.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidHour` for NaN or infinite input
    pub fn set_hour(&mut self, hour: f64) -> Result<WeatherState, SessionError> {
        if !hour.is_finite() {
            return Err(SessionError::InvalidHour(hour));
        }
        let wrapped = hour.rem_euclid(24.0);
        // rem_euclid rounds tiny negative inputs up to exactly 24.0
        self.hour = if wrapped >= 24.0 { 0.0 } else { wrapped };

        let state = self.current();
        self.track_tier(state.alert_tier);
        Ok(state)
    }

    /// Weather at the current slider position
    pub fn current(&self) -> WeatherState {
        self.model.evaluate(self.hour, &self.pattern, self.profile())
    }

    /// Telemetry panel for the current slider position
    pub fn readout(&self) -> Readout {
        Readout::from_state(&self.current())
    }

    /// Clock label for the current slider position
    pub fn clock_label(&self) -> String {
        format_hour(self.hour)
    }

    /// Weather at every slider position `step` hours apart over `[0, 24)`
    pub fn timeline(&self, step: f64) -> Vec<(f64, WeatherState)> {
        let profile = self.profile();
        slider_hours(step)
            .into_iter()
            .map(|hour| (hour, self.model.evaluate(hour, &self.pattern, profile)))
            .collect()
    }

    /// Press a manual alert button
    ///
    /// Yellow and orange force their visuals and produce a backend request.
    /// Clear hands the visuals back to the slider.
    pub fn manual_alert(&self, level: AlertTier) -> ManualAlert {
        info!("Manual {} alert for {}", level, self.location);

        let effects = match level {
            AlertTier::Clear => SceneEffects::from_slider(self.current().alert_tier),
            AlertTier::Yellow | AlertTier::Orange => SceneEffects::for_manual(level),
        };

        ManualAlert {
            dialog: AlertDialog::for_level(level, &self.location),
            effects,
            request: TriggerAlertRequest::new(level, self.location.as_str()),
        }
    }

    /// Bulletin text the backend would send for `level`
    pub fn bulletin(&self, level: AlertTier) -> Option<AlertBulletin> {
        AlertBulletin::compose(level, Some(&self.location), &self.hotlines)
    }

    /// Seven-day outlook for the selected location, starting today
    pub fn forecast(&self, rng: &mut impl Rng) -> Vec<ForecastDay> {
        forecast_from_today(self.profile(), rng)
    }

    /// Tier frequencies over `runs` simulated days at the selected location
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the model fails validation
    pub fn outlook(
        &self,
        runs: u32,
        seed: u64,
        step: f64,
    ) -> Result<EnsembleOutlook, SessionError> {
        Ok(ensemble_outlook(self.profile(), &self.model, runs, seed, step)?)
    }

    /// Draw a new storm day, keeping location and slider position
    pub fn regenerate(&mut self, rng: &mut impl Rng) -> DailyPattern {
        self.pattern = self.model.generate(rng);
        let tier = self.current().alert_tier;
        self.track_tier(tier);
        self.pattern
    }

    fn track_tier(&mut self, tier: AlertTier) {
        if tier != self.last_tier {
            debug!(
                "Alert tier {} -> {} at {} in {}",
                self.last_tier,
                tier,
                self.clock_label(),
                self.location
            );
            self.last_tier = tier;
        }
    }
}
