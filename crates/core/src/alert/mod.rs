//! Manual alert buttons, dialogs and bulletins
//!
//! The dashboard's clear/yellow/orange buttons override the slider visuals,
//! open a modal with a sound cue and (for yellow and orange) send a
//! [`TriggerAlertRequest`] to the backend.

pub mod bulletin;
pub mod hotlines;

pub use bulletin::AlertBulletin;
pub use hotlines::HotlineDirectory;

use crate::api::TriggerAlertRequest;
use crate::core_types::weather::AlertTier;
use crate::readout::rain_layer_opacity;
use serde::{Deserialize, Serialize};

/// Sound cue played with a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    /// Short chime
    Alert,
    /// Looping siren
    Alarm,
}

/// Modal dialog raised by a manual alert button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDialog {
    /// Heading with the tier icon
    pub title: String,
    /// Body naming the location
    pub message: String,
    /// Sound played when the dialog opens
    pub sound: Sound,
}

impl AlertDialog {
    /// Dialog for a manual alert at `location`
    pub fn for_level(level: AlertTier, location: &str) -> Self {
        let (title, message, sound) = match level {
            AlertTier::Clear => (
                "🟢 SYSTEM NORMAL",
                "Simulation reset.".to_string(),
                Sound::Alert,
            ),
            AlertTier::Yellow => (
                "⚠️ WEATHER ADVISORY",
                format!("Yellow Alert in {location}."),
                Sound::Alert,
            ),
            AlertTier::Orange => (
                "🚨 EMERGENCY ALERT",
                format!("Orange Alert in {location}!"),
                Sound::Alarm,
            ),
        };
        AlertDialog {
            title: title.to_string(),
            message,
            sound,
        }
    }
}

/// Visual overlay state for the map and sky layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneEffects {
    /// Rain layer opacity (0.0 - 1.0)
    pub rain_opacity: f64,
    /// Lightning flash animation running
    pub lightning_flash: bool,
    /// Storm marker drawn on the map, coloured by tier
    pub storm_marker: Option<AlertTier>,
}

impl SceneEffects {
    /// Effects driven by the slider: rain only, no flash or marker
    pub fn from_slider(tier: AlertTier) -> Self {
        SceneEffects {
            rain_opacity: rain_layer_opacity(tier),
            lightning_flash: false,
            storm_marker: None,
        }
    }

    /// Effects forced by a manual yellow or orange button
    ///
    /// A manual clear has no forced effects; it hands control back to the
    /// slider, so callers use [`SceneEffects::from_slider`] instead.
    pub fn for_manual(level: AlertTier) -> Self {
        SceneEffects {
            rain_opacity: rain_layer_opacity(level),
            lightning_flash: level == AlertTier::Orange,
            storm_marker: (level != AlertTier::Clear).then_some(level),
        }
    }
}

/// Everything a manual alert button produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualAlert {
    /// Modal shown to the operator
    pub dialog: AlertDialog,
    /// Map overrides applied until the slider moves
    pub effects: SceneEffects,
    /// Backend request, absent for a clear reset
    pub request: Option<TriggerAlertRequest>,
}
