//! Evaluation budget.

/// Remaining tour evaluations.
///
/// # Examples
///
/// ```
/// use tsp_anneal::instance::Budget;
///
/// let mut budget = Budget::Finite(2);
/// assert!(budget.consume());
/// assert!(budget.consume());
/// assert!(!budget.consume());
/// assert!(budget.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// At most this many more evaluations.
    Finite(u64),
    /// No limit; only a stop request ends the run.
    Unbounded,
}

impl Budget {
    /// Builds a budget from an optional limit, `None` meaning unbounded.
    pub fn from_limit(limit: Option<u64>) -> Self {
        match limit {
            Some(n) => Budget::Finite(n),
            None => Budget::Unbounded,
        }
    }

    /// Returns `true` when no evaluation is left.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Budget::Finite(0))
    }

    /// Takes one unit. Returns `false`, leaving the budget untouched, if none
    /// was left.
    pub fn consume(&mut self) -> bool {
        match self {
            Budget::Unbounded => true,
            Budget::Finite(0) => false,
            Budget::Finite(n) => {
                *n -= 1;
                true
            }
        }
    }

    /// Irrevocably exhausts the budget. Idempotent.
    pub fn stop(&mut self) {
        *self = Budget::Finite(0);
    }
}
