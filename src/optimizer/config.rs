//! Optimizer configuration.

use crate::anneal::AnnealConfig;

/// Configuration for the generational search.
///
/// The evaluation budget is not part of this struct: it belongs to the
/// [`Instance`](crate::instance::Instance), which the search shares with
/// whoever may request a stop.
///
/// # Examples
///
/// ```
/// use tsp_anneal::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_max_population(20)
///     .with_seed(42);
/// assert_eq!(config.max_population, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Entries carried into each generation after truncation.
    pub max_population: usize,

    /// Optional cap on completed generations. `None` runs until the budget
    /// is exhausted or a stop is requested.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Temperature and cooling.
    pub anneal: AnnealConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_population: 10,
            max_generations: None,
            seed: None,
            anneal: AnnealConfig::default(),
        }
    }
}

impl OptimizerConfig {
    pub fn with_max_population(mut self, n: usize) -> Self {
        self.max_population = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_anneal(mut self, anneal: AnnealConfig) -> Self {
        self.anneal = anneal;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_population == 0 {
            return Err("max_population must be at least 1".into());
        }
        self.anneal.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.max_population, 10);
        assert!(config.max_generations.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        assert!(OptimizerConfig::default()
            .with_max_population(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_propagates_anneal() {
        let config = OptimizerConfig::default()
            .with_anneal(AnnealConfig::default().with_initial_temperature(-5.0));
        assert!(config.validate().is_err());
    }
}
