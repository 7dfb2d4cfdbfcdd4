//! Simulated-annealing acceptance.
//!
//! Children that are no shorter than their parent enter the next
//! generation with the Metropolis probability `exp(-delta / T)`. The
//! temperature drops once per generation and is clamped to a positive
//! floor.
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod acceptor;
mod config;

pub use acceptor::AnnealingAcceptor;
pub use config::{AnnealConfig, CoolingSchedule};
