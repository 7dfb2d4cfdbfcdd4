//! Generational search loop.
//!
//! [`OptimizationLoop`] seeds the population with the optimal bitonic
//! tour, then repeats generations until the evaluation budget runs out:
//! seed → drain current pool (parents survive, three children each,
//! Metropolis admission) → truncate → cool → repeat.

use super::config::OptimizerConfig;
use super::types::{GenerationStats, OptimizationResult, ProgressObserver};
use crate::anneal::AnnealingAcceptor;
use crate::bitonic::BitonicSeeder;
use crate::error::{BudgetExhausted, Result, TspError};
use crate::evaluator::tour_length;
use crate::instance::Instance;
use crate::population::{PopulationManager, ScoredTour};
use crate::random::create_rng;
use crate::tour::operators::Operator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Executes the optimization.
///
/// # Usage
///
/// ```
/// use tsp_anneal::instance::{Budget, Instance, Point};
/// use tsp_anneal::optimizer::{OptimizationLoop, OptimizerConfig};
///
/// let points = (0..8)
///     .map(|i| Point::new(i, (i as f64).cos(), (i as f64).sin()))
///     .collect();
/// let mut instance = Instance::new(points, Budget::Finite(200)).unwrap();
/// let config = OptimizerConfig::default().with_seed(42);
/// let result = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap();
/// assert!(result.best.tour.is_permutation_of(8));
/// assert_eq!(result.evaluations, 200);
/// ```
pub struct OptimizationLoop;

impl OptimizationLoop {
    /// Runs until the instance's budget is exhausted or the configured
    /// generation cap is reached.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfig`] for a rejected configuration, and any
    /// error from [`BitonicSeeder::seed`].
    pub fn run<O: ProgressObserver>(
        instance: &mut Instance,
        config: &OptimizerConfig,
        observer: &mut O,
    ) -> Result<OptimizationResult> {
        Self::run_with_cancel(instance, config, None, observer)
    }

    /// Runs with an optional cancellation flag.
    ///
    /// The flag is polled before each parent is processed and at every
    /// generation boundary, never during an evaluation. Once it is seen
    /// set, the instance's budget is stopped and the run ends with the best
    /// tour found so far.
    pub fn run_with_cancel<O: ProgressObserver>(
        instance: &mut Instance,
        config: &OptimizerConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> Result<OptimizationResult> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let n = instance.len();

        // 1. Seed
        let seed = BitonicSeeder::seed(instance)?;
        let seed_length = match instance.evaluate(&seed) {
            Ok(length) => length,
            Err(BudgetExhausted) => tour_length(instance, &seed),
        };
        info!(length = seed_length, "bitonic seed evaluated");

        let mut best = ScoredTour::new(seed_length, seed.clone());
        let mut best_history = vec![seed_length];
        observer.on_improvement(&best, instance);

        let mut population = PopulationManager::new();
        population.push_candidate(ScoredTour::new(seed_length, seed));
        population.advance_generation(config.max_population);

        let mut acceptor = AnnealingAcceptor::new(&config.anneal);
        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Generations
        loop {
            poll_cancel(cancel.as_deref(), instance, &mut cancelled);
            if !instance.has_budget() {
                break;
            }
            if config.max_generations.is_some_and(|max| generations >= max) {
                break;
            }

            let mut exhausted = false;
            while let Some(parent) = population.pop_next_candidate() {
                poll_cancel(cancel.as_deref(), instance, &mut cancelled);

                for op in Operator::ALL {
                    let child = op.apply(&parent.tour, &mut rng);
                    debug_assert!(
                        child.is_permutation_of(n),
                        "{} produced an invalid tour",
                        op.name()
                    );

                    let length = match instance.evaluate(&child) {
                        Ok(length) => length,
                        Err(BudgetExhausted) => {
                            exhausted = true;
                            break;
                        }
                    };
                    trace!(operator = op.name(), length, "child evaluated");

                    if length < best.length {
                        best = ScoredTour::new(length, child.clone());
                        best_history.push(length);
                        info!(generation = generations + 1, length, "new best tour");
                        observer.on_improvement(&best, instance);
                    }

                    if acceptor.accept(length, parent.length, &mut rng) {
                        population.push_candidate(ScoredTour::new(length, child));
                    }
                }

                // Parents survive into the next generation by default.
                population.push_candidate(parent);
                if exhausted {
                    break;
                }
            }

            // 3. Generation boundary
            population.advance_generation(config.max_population);
            acceptor.cool();
            generations += 1;

            let stats = GenerationStats {
                generation: generations,
                best_length: best.length,
                pool_size: population.current_len(),
                temperature: acceptor.temperature(),
                evaluations: instance.evaluations(),
            };
            debug!(
                generation = stats.generation,
                best = stats.best_length,
                pool = stats.pool_size,
                temperature = stats.temperature,
                "generation finished"
            );
            observer.on_generation(&stats);
        }

        info!(
            generations,
            evaluations = instance.evaluations(),
            best = best.length,
            cancelled,
            "search finished"
        );

        Ok(OptimizationResult {
            best,
            generations,
            evaluations: instance.evaluations(),
            cancelled,
            final_temperature: acceptor.temperature(),
            best_history,
        })
    }
}

fn poll_cancel(cancel: Option<&AtomicBool>, instance: &mut Instance, cancelled: &mut bool) {
    if *cancelled {
        return;
    }
    if let Some(flag) = cancel {
        if flag.load(Ordering::Relaxed) {
            info!("stop requested, finishing current generation");
            *cancelled = true;
            instance.request_stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anneal::AnnealConfig;
    use crate::instance::{Budget, Point};
    use rand::Rng;

    fn random_instance(n: usize, seed: u64, budget: Budget) -> Instance {
        let mut rng = create_rng(seed);
        let points = (0..n)
            .map(|i| {
                Point::new(
                    i as u64,
                    rng.random_range(0.0..100.0),
                    rng.random_range(0.0..100.0),
                )
            })
            .collect();
        Instance::new(points, budget).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        improvements: Vec<f64>,
        generations: Vec<GenerationStats>,
    }

    impl ProgressObserver for Recorder {
        fn on_improvement(&mut self, best: &ScoredTour, _instance: &Instance) {
            self.improvements.push(best.length);
        }

        fn on_generation(&mut self, stats: &GenerationStats) {
            self.generations.push(*stats);
        }
    }

    fn low_temperature() -> AnnealConfig {
        AnnealConfig::default().with_initial_temperature(5.0)
    }

    #[test]
    fn test_unit_square_optimum() {
        let points = vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 0.0, 1.0),
            Point::new(3, 1.0, 0.0),
            Point::new(4, 1.0, 1.0),
        ];
        let mut instance = Instance::new(points, Budget::Finite(100)).unwrap();
        let config = OptimizerConfig::default().with_seed(42);
        let result = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap();
        assert!((result.best_length() - 4.0).abs() < 1e-9);
        assert!(result.best.tour.is_permutation_of(4));
    }

    #[test]
    fn test_budget_exactness() {
        let mut instance = random_instance(20, 1, Budget::Finite(50));
        let config = OptimizerConfig::default().with_seed(42);
        let result = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap();
        assert_eq!(result.evaluations, 50);
        assert_eq!(instance.evaluations(), 50);
        assert!(!instance.has_budget());
        assert!(!result.cancelled);
    }

    #[test]
    fn test_best_history_non_increasing() {
        let mut instance = random_instance(30, 2, Budget::Finite(3000));
        let config = OptimizerConfig::default()
            .with_seed(42)
            .with_anneal(low_temperature());
        let mut recorder = Recorder::default();
        let result = OptimizationLoop::run(&mut instance, &config, &mut recorder).unwrap();

        for window in result.best_history.windows(2) {
            assert!(
                window[1] < window[0],
                "best length should strictly improve on every report: {} >= {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(recorder.improvements, result.best_history);
        assert!((tour_length(&instance, &result.best.tour) - result.best_length()).abs() < 1e-9);
        assert!(result.best.tour.is_permutation_of(30));
    }

    #[test]
    fn test_generation_stats() {
        let mut instance = random_instance(15, 3, Budget::Finite(2000));
        let config = OptimizerConfig::default()
            .with_max_population(4)
            .with_seed(7)
            .with_anneal(low_temperature());
        let mut recorder = Recorder::default();
        let result = OptimizationLoop::run(&mut instance, &config, &mut recorder).unwrap();

        assert_eq!(recorder.generations.len(), result.generations);
        for (i, stats) in recorder.generations.iter().enumerate() {
            assert_eq!(stats.generation, i + 1);
            assert!(stats.pool_size <= 4);
            assert!(stats.pool_size >= 1);
        }
        for window in recorder.generations.windows(2) {
            assert!(window[1].best_length <= window[0].best_length);
            assert!(window[1].temperature <= window[0].temperature);
            assert!(window[1].temperature > 0.0);
        }
    }

    #[test]
    fn test_max_generations() {
        let mut instance = random_instance(10, 4, Budget::Unbounded);
        let config = OptimizerConfig::default()
            .with_max_generations(5)
            .with_seed(42);
        let result = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap();
        assert_eq!(result.generations, 5);
        assert!((result.final_temperature - (5_000_000.0 - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_cancel_before_start() {
        let mut instance = random_instance(10, 5, Budget::Unbounded);
        let config = OptimizerConfig::default().with_seed(42);
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            OptimizationLoop::run_with_cancel(&mut instance, &config, Some(cancel), &mut ())
                .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.evaluations, 1);
        assert!(!instance.has_budget());
    }

    #[test]
    fn test_cancel_during_run() {
        let mut instance = random_instance(25, 6, Budget::Unbounded);
        let config = OptimizerConfig::default().with_seed(42);

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let result =
            OptimizationLoop::run_with_cancel(&mut instance, &config, Some(cancel), &mut ())
                .unwrap();
        assert!(result.cancelled);
        assert!(result.best.tour.is_permutation_of(25));
    }

    #[test]
    fn test_zero_budget_returns_seed() {
        let mut instance = random_instance(12, 8, Budget::Finite(0));
        let seed = BitonicSeeder::seed(&instance).unwrap();
        let config = OptimizerConfig::default().with_seed(1);
        let result = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap();
        assert_eq!(result.best.tour, seed);
        assert_eq!(result.evaluations, 0);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_never_worse_than_seed() {
        let mut instance = random_instance(40, 9, Budget::Finite(1500));
        let seed = BitonicSeeder::seed(&instance).unwrap();
        let seed_length = tour_length(&instance, &seed);
        let config = OptimizerConfig::default().with_seed(3);
        let result = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap();
        assert!(result.best_length() <= seed_length + 1e-9);
        assert!((result.best_history[0] - seed_length).abs() < 1e-9);
    }

    #[test]
    fn test_reproducible_with_seed() {
        let config = OptimizerConfig::default()
            .with_seed(123)
            .with_anneal(low_temperature());
        let mut a = random_instance(20, 10, Budget::Finite(600));
        let mut b = random_instance(20, 10, Budget::Finite(600));
        let ra = OptimizationLoop::run(&mut a, &config, &mut ()).unwrap();
        let rb = OptimizationLoop::run(&mut b, &config, &mut ()).unwrap();
        assert_eq!(ra.best_history, rb.best_history);
        assert_eq!(ra.best.tour, rb.best.tour);
        assert_eq!(ra.generations, rb.generations);
    }

    #[test]
    fn test_invalid_config() {
        let mut instance = random_instance(5, 11, Budget::Finite(10));
        let config = OptimizerConfig::default().with_max_population(0);
        let err = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)));
        assert_eq!(instance.evaluations(), 0);
    }

    #[test]
    fn test_infeasible_instance() {
        let mut instance =
            Instance::new(vec![Point::new(1, 0.0, 0.0)], Budget::Finite(10)).unwrap();
        let err = OptimizationLoop::run(&mut instance, &OptimizerConfig::default(), &mut ())
            .unwrap_err();
        assert!(matches!(err, TspError::InfeasibleInstance { points: 1 }));
    }
}
