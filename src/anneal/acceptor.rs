//! Metropolis acceptance with a cooling temperature.

use super::config::{AnnealConfig, CoolingSchedule};
use rand::Rng;

/// Decides whether a child enters the next generation.
///
/// A child shorter than its baseline is always accepted. Otherwise it is
/// accepted with probability `exp(-(candidate - baseline) / T)`: the
/// acceptance chance falls as the child gets worse and as the temperature
/// drops.
#[derive(Debug, Clone)]
pub struct AnnealingAcceptor {
    temperature: f64,
    min_temperature: f64,
    cooling: CoolingSchedule,
}

impl AnnealingAcceptor {
    pub fn new(config: &AnnealConfig) -> Self {
        Self {
            temperature: config.initial_temperature.max(config.min_temperature),
            min_temperature: config.min_temperature,
            cooling: config.cooling,
        }
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Acceptance decision for a given uniform draw in `[0, 1)`.
    ///
    /// Pure: the result depends only on the arguments and the current
    /// temperature.
    pub fn accept_with_draw(&self, candidate: f64, baseline: f64, draw: f64) -> bool {
        if candidate < baseline {
            return true;
        }
        (-(candidate - baseline) / self.temperature).exp() > draw
    }

    /// Acceptance decision drawing from `rng` when the child is not an
    /// improvement.
    pub fn accept<R: Rng>(&self, candidate: f64, baseline: f64, rng: &mut R) -> bool {
        if candidate < baseline {
            return true;
        }
        let draw: f64 = rng.random_range(0.0..1.0);
        self.accept_with_draw(candidate, baseline, draw)
    }

    /// Applies one cooling step, never going below the configured floor.
    pub fn cool(&mut self) {
        let next = match self.cooling {
            CoolingSchedule::Linear { step } => self.temperature - step,
            CoolingSchedule::Geometric { alpha } => self.temperature * alpha,
        };
        self.temperature = next.max(self.min_temperature);
    }
}
