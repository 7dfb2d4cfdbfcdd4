//! Optimal bitonic tour by dynamic programming.
//!
//! A bitonic tour leaves the leftmost point, moves strictly rightward to
//! the rightmost point and returns strictly leftward. Over points sorted
//! by `x`, the shortest such tour is found in `O(n^2)` time.
//!
//! # State space
//!
//! `cost[a][b]` is the shortest pair of chains that start at point 0, have
//! together visited exactly `0..=max(a, b)`, and end at `a` (ascending
//! chain) and `b` (descending chain, built left to right and reversed at
//! the end). From `(a, b)` the next point `k = max(a, b) + 1` extends
//! either chain. When `k` is the last point, both chains close on it.
//!
//! # Scale
//!
//! Memory is `O(n^2)` (a cost table and a predecessor table), which is the
//! binding constraint long before time is. Instances above
//! [`MAX_BITONIC_POINTS`] are rejected instead of attempting the
//! allocation, and a failed table allocation below the limit is reported
//! as [`TspError::InstanceTooLarge`] as well.
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein, *Introduction to Algorithms*,
//! problem 15-3 (bitonic euclidean TSP).

use crate::error::{Result, TspError};
use crate::instance::Instance;
use crate::tour::Tour;
use tracing::{debug, info};

/// Largest instance the dynamic program accepts.
pub const MAX_BITONIC_POINTS: usize = 20_000;

/// Builds the initial tour.
pub struct BitonicSeeder;

impl BitonicSeeder {
    /// Returns a shortest bitonic tour over the instance's points.
    ///
    /// The ascending chain runs from point 0 to point `n - 1` in increasing
    /// index order; the descending chain holds the remaining points in
    /// decreasing index order.
    ///
    /// # Errors
    ///
    /// - [`TspError::InfeasibleInstance`] if `n < 2`
    /// - [`TspError::InstanceTooLarge`] if `n > MAX_BITONIC_POINTS`
    pub fn seed(instance: &Instance) -> Result<Tour> {
        let n = instance.len();
        if n < 2 {
            return Err(TspError::InfeasibleInstance { points: n });
        }
        if n > MAX_BITONIC_POINTS {
            return Err(TspError::InstanceTooLarge {
                points: n,
                limit: MAX_BITONIC_POINTS,
            });
        }
        info!(n, "computing bitonic seed");

        let last = n - 1;
        let at = |a: usize, b: usize| a * n + b;
        let mut cost = dp_table(n, f64::INFINITY)?;
        let mut back = dp_table(n, usize::MAX)?;
        cost[at(0, 0)] = 0.0;

        // Transitions only go to a larger max(a, b): to (k, b) with k > a,
        // or to (a, k) with k > b on the same row. Row-major order visits
        // every state after all of its predecessors.
        let mut best = f64::INFINITY;
        let mut terminal = (0, 0);
        for a in 0..last {
            for b in 0..last {
                let c = cost[at(a, b)];
                if !c.is_finite() {
                    continue;
                }
                let k = a.max(b) + 1;
                if k == last {
                    let total = c + instance.distance(a, k) + instance.distance(b, k);
                    if total < best {
                        best = total;
                        terminal = (a, b);
                    }
                    continue;
                }
                relax(&mut cost, &mut back, at(k, b), c + instance.distance(a, k), at(a, b));
                relax(&mut cost, &mut back, at(a, k), c + instance.distance(b, k), at(a, b));
            }
        }

        let (mut a, mut b) = terminal;
        let mut ascending = vec![last];
        let mut descending = Vec::new();
        while (a, b) != (0, 0) {
            let prev = back[at(a, b)];
            let (pa, pb) = (prev / n, prev % n);
            if pa != a {
                ascending.push(a);
            } else {
                descending.push(b);
            }
            a = pa;
            b = pb;
        }
        ascending.push(0);
        ascending.reverse();

        debug!(length = best, "bitonic seed ready");
        Ok(Tour::new(ascending, descending))
    }
}

/// Allocates an `n * n` table, reporting allocation failure as
/// [`TspError::InstanceTooLarge`] instead of aborting.
fn dp_table<T: Clone>(n: usize, fill: T) -> Result<Vec<T>> {
    let too_large = || TspError::InstanceTooLarge {
        points: n,
        limit: MAX_BITONIC_POINTS,
    };
    let len = n.checked_mul(n).ok_or_else(too_large)?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large())?;
    table.resize(len, fill);
    Ok(table)
}

fn relax(cost: &mut [f64], back: &mut [usize], to: usize, value: f64, from: usize) {
    if value < cost[to] {
        cost[to] = value;
        back[to] = from;
    }
}
