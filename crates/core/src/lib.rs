//! Storm Simulation Core Library
//!
//! Drives a storm-alert dashboard: one randomly generated storm per simulated
//! day, evaluated at any slider hour into wind, rainfall, lightning and a
//! three-level alert tier for the selected town.
//!
//! ## Layout
//!
//! - [`storm`]: daily pattern generator and intensity evaluator
//! - [`location`]: town list and baseline climate profiles
//! - [`simulation`]: session context, config and the Monte-Carlo outlook
//! - [`alert`], [`readout`], [`forecast`], [`clock`]: dashboard presentation
//! - [`api`]: JSON bodies exchanged with the alert backend
//!
//! ```
//! use storm_sim_core::{evaluate, AlertTier, DailyPattern, LocationRegistry};
//!
//! let registry = LocationRegistry::builtin();
//! let pattern = DailyPattern::new(15.0, 80);
//! let state = evaluate(15.0, &pattern, registry.profile("Angeles City, Pampanga"));
//! assert_eq!(*state.wind_speed, 92.0);
//! assert_eq!(state.alert_tier, AlertTier::Orange);
//! ```

// Core types and utilities
pub mod core_types;

// Storm model
pub mod storm;

// Dashboard state and presentation
pub mod alert;
pub mod api;
pub mod clock;
pub mod forecast;
pub mod location;
pub mod readout;
pub mod simulation;

// Re-export core types
pub use core_types::{
    AlertTier, Celsius, Condition, KilometersPerHour, LocationProfile, MillimetersPerHour,
    ParseTierError, WeatherState,
};

// Re-export storm model
pub use storm::{evaluate, generate, DailyPattern, StormModel};

// Re-export dashboard types
pub use alert::{AlertBulletin, AlertDialog, HotlineDirectory, ManualAlert, SceneEffects, Sound};
pub use api::{
    ApiResponse, ApiStatus, LoginRequest, RegisterError, RegisterRequest, TriggerAlertRequest,
};
pub use forecast::{ForecastDay, ForecastIcon};
pub use location::{LocationRegistry, DEFAULT_LOCATION, LOCATIONS};
pub use readout::Readout;
pub use simulation::{
    ensemble_outlook, ConfigError, EnsembleOutlook, Session, SessionError, SimulationConfig,
};
