//! Generational tour pools.
//!
//! [`PopulationManager`] keeps two min-heaps of [`ScoredTour`]: the current
//! generation, drained while parents are mutated, and the next generation,
//! filled with surviving parents and admitted children. At the generation
//! boundary the best `max_population` entries become the new current pool
//! and the rest are dropped (elitist truncation).
//!
//! Entries own their tours. Moving an entry between pools moves the tour;
//! discarding an entry drops it.

use crate::tour::Tour;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A tour with its evaluated length. Ordered by length, shortest first.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredTour {
    pub length: f64,
    pub tour: Tour,
}

impl ScoredTour {
    pub fn new(length: f64, tour: Tour) -> Self {
        Self { length, tour }
    }
}

impl PartialEq for ScoredTour {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredTour {}

impl PartialOrd for ScoredTour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredTour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length.total_cmp(&other.length)
    }
}

/// Current and next generation pools.
#[derive(Debug, Default)]
pub struct PopulationManager {
    current: BinaryHeap<Reverse<ScoredTour>>,
    next: BinaryHeap<Reverse<ScoredTour>>,
}

impl PopulationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the next-generation pool. `O(log n)`.
    pub fn push_candidate(&mut self, candidate: ScoredTour) {
        self.next.push(Reverse(candidate));
    }

    /// Returns `true` if the current pool still has entries.
    pub fn next_candidate_available(&self) -> bool {
        !self.current.is_empty()
    }

    /// Removes and returns the shortest entry of the current pool.
    ///
    /// Ties come out in unspecified order.
    pub fn pop_next_candidate(&mut self) -> Option<ScoredTour> {
        self.current.pop().map(|Reverse(c)| c)
    }

    /// Promotes up to `max_population` of the shortest next-generation
    /// entries into the current pool and drops the rest.
    ///
    /// Entries still left in the current pool (a generation cut short)
    /// compete in the same truncation, so afterwards the current pool never
    /// holds more than `max_population` entries.
    pub fn advance_generation(&mut self, max_population: usize) {
        self.next.append(&mut self.current);
        let keep = max_population.min(self.next.len());
        let mut promoted = BinaryHeap::with_capacity(keep);
        for _ in 0..keep {
            if let Some(entry) = self.next.pop() {
                promoted.push(entry);
            }
        }
        self.current = promoted;
        self.next.clear();
    }

    /// Size of the current pool.
    pub fn current_len(&self) -> usize {
        self.current.len()
    }

    /// Size of the next-generation pool.
    pub fn next_len(&self) -> usize {
        self.next.len()
    }

    /// Shortest entry of the current pool, if any.
    pub fn peek_best(&self) -> Option<&ScoredTour> {
        self.current.peek().map(|Reverse(c)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(length: f64) -> ScoredTour {
        ScoredTour::new(length, Tour::new(vec![0], vec![1]))
    }

    fn drain_lengths(pm: &mut PopulationManager) -> Vec<f64> {
        let mut out = Vec::new();
        while let Some(c) = pm.pop_next_candidate() {
            out.push(c.length);
        }
        out
    }

    #[test]
    fn test_push_goes_to_next_pool() {
        let mut pm = PopulationManager::new();
        pm.push_candidate(scored(1.0));
        assert!(!pm.next_candidate_available());
        assert_eq!(pm.next_len(), 1);
        assert!(pm.pop_next_candidate().is_none());
    }

    #[test]
    fn test_pop_order_shortest_first() {
        let mut pm = PopulationManager::new();
        for len in [5.0, 1.0, 3.0, 4.0, 2.0] {
            pm.push_candidate(scored(len));
        }
        pm.advance_generation(10);
        assert_eq!(pm.peek_best().map(|c| c.length), Some(1.0));
        assert_eq!(drain_lengths(&mut pm), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_advance_truncates_to_best() {
        let mut pm = PopulationManager::new();
        for len in [9.0, 2.0, 7.0, 1.0, 8.0, 3.0] {
            pm.push_candidate(scored(len));
        }
        pm.advance_generation(3);
        assert_eq!(pm.current_len(), 3);
        assert_eq!(pm.next_len(), 0);
        assert_eq!(drain_lengths(&mut pm), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_advance_with_fewer_than_max() {
        let mut pm = PopulationManager::new();
        pm.push_candidate(scored(4.0));
        pm.push_candidate(scored(2.0));
        pm.advance_generation(10);
        assert_eq!(pm.current_len(), 2);
    }

    #[test]
    fn test_advance_on_empty() {
        let mut pm = PopulationManager::new();
        pm.advance_generation(5);
        assert_eq!(pm.current_len(), 0);
        assert!(!pm.next_candidate_available());
    }

    #[test]
    fn test_leftover_current_competes() {
        let mut pm = PopulationManager::new();
        for len in [1.0, 6.0, 7.0] {
            pm.push_candidate(scored(len));
        }
        pm.advance_generation(3);
        // Only the best parent is drained before the generation ends.
        let parent = pm.pop_next_candidate().unwrap();
        pm.push_candidate(parent);
        pm.push_candidate(scored(0.5));
        pm.push_candidate(scored(9.0));
        pm.advance_generation(3);
        assert_eq!(drain_lengths(&mut pm), vec![0.5, 1.0, 6.0]);
    }

    #[test]
    fn test_population_bound_holds() {
        let mut pm = PopulationManager::new();
        for round in 0..10 {
            for i in 0..(round * 3 + 1) {
                pm.push_candidate(scored(i as f64));
            }
            pm.advance_generation(4);
            assert!(pm.current_len() <= 4);
        }
    }

    #[test]
    fn test_scored_ordering() {
        assert!(scored(1.0) < scored(2.0));
        assert_eq!(scored(3.0), scored(3.0));
        let mut v = vec![scored(2.0), scored(0.0), scored(1.0)];
        v.sort();
        assert_eq!(v.iter().map(|c| c.length).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
    }
}
