//! Run results and the progress observer seam.

use crate::instance::Instance;
use crate::population::ScoredTour;

/// Status after one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,
    /// Best length seen so far.
    pub best_length: f64,
    /// Current pool size after truncation.
    pub pool_size: usize,
    /// Temperature after cooling.
    pub temperature: f64,
    /// Evaluations consumed so far.
    pub evaluations: u64,
}

/// Receives progress from the optimizer.
///
/// Both hooks default to no-ops. `()` implements the trait for runs that
/// need no reporting.
pub trait ProgressObserver {
    /// Called with every new best tour, starting with the seed.
    fn on_improvement(&mut self, _best: &ScoredTour, _instance: &Instance) {}

    /// Called at the end of each generation.
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

impl ProgressObserver for () {}

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best tour found.
    pub best: ScoredTour,

    /// Number of completed generations.
    pub generations: usize,

    /// Evaluations consumed, the seed included.
    pub evaluations: u64,

    /// Whether a stop was requested through the cancellation flag.
    pub cancelled: bool,

    /// Temperature when the run ended.
    pub final_temperature: f64,

    /// Best length after each improvement, starting with the seed.
    /// Non-increasing.
    pub best_history: Vec<f64>,
}

impl OptimizationResult {
    pub fn best_length(&self) -> f64 {
        self.best.length
    }
}
