//! Tour length evaluation.
//!
//! [`tour_length`] is the pure computation. [`Instance::evaluate`] is the
//! budget-gated entry point the optimizer uses: every successful call
//! costs exactly one unit of the evaluation budget.

use crate::error::BudgetExhausted;
use crate::instance::Instance;
use crate::tour::Tour;

/// Closed length of `tour`.
///
/// Sums consecutive distances along the ascending chain, the bridge from
/// its last point to the first point of the descending chain, consecutive
/// distances along the descending chain, and the closing edge back to the
/// first point of the ascending chain.
pub fn tour_length(instance: &Instance, tour: &Tour) -> f64 {
    let mut order = tour.visit_order();
    let Some(first) = order.next() else {
        return 0.0;
    };
    let mut length = 0.0;
    let mut prev = first;
    for idx in order {
        length += instance.distance(prev, idx);
        prev = idx;
    }
    length + instance.distance(prev, first)
}

impl Instance {
    /// Evaluates `tour`, consuming one unit of budget.
    ///
    /// # Errors
    ///
    /// [`BudgetExhausted`] if no budget was left; nothing is computed.
    pub fn evaluate(&mut self, tour: &Tour) -> Result<f64, BudgetExhausted> {
        if !self.consume_budget() {
            return Err(BudgetExhausted);
        }
        Ok(tour_length(self, tour))
    }
}
