//! Error types.
//!
//! Loading and seeding failures are fatal and surface before any search
//! starts. Budget exhaustion is not an error in that sense: it is the
//! normal end-of-run signal and has its own value type, [`BudgetExhausted`].

use thiserror::Error;

/// Malformed instance input.
///
/// Line numbers are 1-based and refer to the instance file as read.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file ended before the dimension line.
    #[error("line {line}: missing point-count declaration")]
    MissingDimension { line: usize },

    /// The dimension line did not carry a usable count.
    #[error("line {line}: invalid point count {value:?}")]
    InvalidDimension { line: usize, value: String },

    /// Fewer coordinate lines than declared.
    #[error("expected {expected} coordinate lines, found {found}")]
    TruncatedCoordinates { expected: usize, found: usize },

    /// A coordinate line did not have exactly `id x y`.
    #[error("line {line}: expected 3 fields `id x y`, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A field could not be parsed as a number.
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A coordinate was NaN or infinite.
    #[error("point {id}: coordinates must be finite")]
    NonFiniteCoordinate { id: u64 },

    /// Reading the input failed.
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum TspError {
    /// The instance could not be loaded.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// A tour needs at least two points.
    #[error("infeasible instance: {points} point(s), at least 2 required")]
    InfeasibleInstance { points: usize },

    /// The bitonic dynamic program holds two `n x n` tables in memory.
    #[error("instance too large: {points} points exceeds the limit of {limit}")]
    InstanceTooLarge { points: usize, limit: usize },

    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Report output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returned by [`Instance::evaluate`](crate::instance::Instance::evaluate)
/// once the evaluation budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("evaluation budget exhausted")]
pub struct BudgetExhausted;

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, TspError>;
