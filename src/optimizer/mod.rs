//! Generational search driver.
//!
//! Ties the other modules together:
//!
//! - [`BitonicSeeder`](crate::bitonic::BitonicSeeder) builds the first tour
//! - [`Operator`](crate::tour::operators::Operator) produces three children
//!   per parent
//! - [`Instance::evaluate`](crate::instance::Instance::evaluate) scores them
//!   against the shared budget
//! - [`AnnealingAcceptor`](crate::anneal::AnnealingAcceptor) decides which
//!   children enter the next generation
//! - [`PopulationManager`](crate::population::PopulationManager) truncates
//!   the pool at each boundary
//!
//! Execution is single-threaded. The only outside input is an optional
//! cancellation flag, polled at safe points.

mod config;
mod runner;
mod types;

pub use config::OptimizerConfig;
pub use runner::OptimizationLoop;
pub use types::{GenerationStats, OptimizationResult, ProgressObserver};
