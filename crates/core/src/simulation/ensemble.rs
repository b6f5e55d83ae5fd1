//! Monte-Carlo alert outlook
//!
//! Simulates many independent storm days for one location and counts how
//! often each slider hour lands in each alert tier. Runs are seeded
//! individually (`seed + run`), so the outlook is identical regardless of how
//! rayon splits the work.

use crate::clock::slider_hours;
use crate::core_types::weather::{AlertTier, LocationProfile};
use crate::simulation::config::ConfigError;
use crate::storm::StormModel;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Per-hour tier counts over an ensemble of simulated days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleOutlook {
    hours: Vec<f64>,
    counts: Vec<[u32; 3]>,
    runs: u32,
}

impl EnsembleOutlook {
    /// Slider hours sampled
    pub fn hours(&self) -> &[f64] {
        &self.hours
    }

    /// Number of simulated days
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Raw counts per tier (`Clear`, `Yellow`, `Orange`) at a slider index
    pub fn counts(&self, hour_index: usize) -> Option<[u32; 3]> {
        self.counts.get(hour_index).copied()
    }

    /// Fraction of days in `tier` at a slider index
    ///
    /// Zero for an empty ensemble or an index past the last slider hour.
    pub fn probability(&self, hour_index: usize, tier: AlertTier) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.counts.get(hour_index).map_or(0.0, |counts| {
            f64::from(counts[tier.index()]) / f64::from(self.runs)
        })
    }

    /// Probability of at least `tier` at a slider index
    pub fn probability_at_least(&self, hour_index: usize, tier: AlertTier) -> f64 {
        AlertTier::ALL
            .iter()
            .filter(|t| **t >= tier)
            .map(|t| self.probability(hour_index, *t))
            .sum()
    }

    /// Slider hour with the highest orange probability, with that probability
    ///
    /// `None` when no run reached orange.
    pub fn peak_risk(&self) -> Option<(f64, f64)> {
        self.hours
            .iter()
            .enumerate()
            .map(|(i, hour)| (*hour, self.probability(i, AlertTier::Orange)))
            .filter(|(_, p)| *p > 0.0)
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Simulate `runs` storm days at one location
///
/// Day `i` is drawn from `StdRng::seed_from_u64(seed + i)` and evaluated at
/// every slider hour `step` apart.
///
/// # Errors
/// Returns `ConfigError::Invalid` if the model fails validation; nothing is
/// simulated in that case
pub fn ensemble_outlook(
    profile: &LocationProfile,
    model: &StormModel,
    runs: u32,
    seed: u64,
    step: f64,
) -> Result<EnsembleOutlook, ConfigError> {
    model.validate()?;

    let hours = slider_hours(step);
    let empty = || vec![[0_u32; 3]; hours.len()];

    let counts = (0..runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(u64::from(run)));
            let pattern = model.draw(&mut rng);

            let mut day = empty();
            for (slot, hour) in day.iter_mut().zip(&hours) {
                let tier = model.evaluate(*hour, &pattern, profile).alert_tier;
                slot[tier.index()] += 1;
            }
            day
        })
        .reduce(empty, |mut total, day| {
            for (acc, counts) in total.iter_mut().zip(day) {
                for (a, c) in acc.iter_mut().zip(counts) {
                    *a += c;
                }
            }
            total
        });

    info!(
        "Ensemble outlook: {} runs over {} slider hours (seed {})",
        runs,
        hours.len(),
        seed
    );

    Ok(EnsembleOutlook {
        hours,
        counts,
        runs,
    })
}
