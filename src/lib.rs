//! Heuristic optimizer for the planar Euclidean Traveling Salesman Problem.
//!
//! The search starts from the shortest *bitonic* tour, computed exactly by
//! dynamic programming, then evolves a small population of tours:
//!
//! - **Tour** ([`tour`]): two index chains (outbound and return) with
//!   segment-shuffle mutations and a chain-to-chain crossover.
//! - **Bitonic seed** ([`bitonic`]): `O(n^2)` dynamic program over sorted
//!   points.
//! - **Evaluation** ([`evaluator`]): closed tour length, gated by a finite
//!   or unbounded evaluation budget held by the [`instance`].
//! - **Population** ([`population`]): current/next generation min-heaps
//!   with elitist truncation.
//! - **Annealing** ([`anneal`]): Metropolis admission of children with a
//!   cooling temperature.
//! - **Driver** ([`optimizer`]): the generational loop, cooperative
//!   cancellation and progress reporting ([`report`]).
//!
//! No optimality guarantee is given. The seed's quadratic memory limits
//! practical instance size (see [`bitonic::MAX_BITONIC_POINTS`]).
//!
//! # Example
//!
//! ```
//! use tsp_anneal::instance::{Budget, Instance, Point};
//! use tsp_anneal::optimizer::{OptimizationLoop, OptimizerConfig};
//!
//! let points = vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 0.0, 1.0),
//!     Point::new(3, 1.0, 0.0),
//!     Point::new(4, 1.0, 1.0),
//! ];
//! let mut instance = Instance::new(points, Budget::Finite(50)).unwrap();
//! let config = OptimizerConfig::default().with_seed(42);
//! let result = OptimizationLoop::run(&mut instance, &config, &mut ()).unwrap();
//! assert!((result.best_length() - 4.0).abs() < 1e-9);
//! ```

pub mod anneal;
pub mod bitonic;
pub mod error;
pub mod evaluator;
pub mod instance;
pub mod optimizer;
pub mod population;
pub mod random;
pub mod report;
pub mod tour;

pub use error::{BudgetExhausted, LoadError, Result, TspError};
