//! Tour operators.
//!
//! All three read a parent tour and allocate a child; the parent is never
//! modified, so one parent can feed every operator in a generation step.
//!
//! - [`Tour::mutate_ascending_segment`]: shuffle a random window of the
//!   ascending chain
//! - [`Tour::mutate_descending_segment`]: same on the descending chain
//! - [`Tour::crossover`]: pool one window from each chain and redistribute
//!   the pooled points between the two windows

use super::Tour;
use crate::random::random_segment;
use rand::seq::SliceRandom;
use rand::Rng;

/// The operators applied to every parent, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    MutateAscending,
    MutateDescending,
    Crossover,
}

impl Operator {
    /// All operators, in the order the optimizer applies them.
    pub const ALL: [Operator; 3] = [
        Operator::MutateAscending,
        Operator::MutateDescending,
        Operator::Crossover,
    ];

    /// Produces a child of `tour`.
    pub fn apply<R: Rng>(self, tour: &Tour, rng: &mut R) -> Tour {
        match self {
            Operator::MutateAscending => tour.mutate_ascending_segment(rng),
            Operator::MutateDescending => tour.mutate_descending_segment(rng),
            Operator::Crossover => tour.crossover(rng),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::MutateAscending => "mutate-ascending",
            Operator::MutateDescending => "mutate-descending",
            Operator::Crossover => "crossover",
        }
    }
}

impl Tour {
    /// Copies the tour and uniformly permutes a random closed window
    /// `[s, e]` of the ascending chain. The descending chain is untouched.
    pub fn mutate_ascending_segment<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut child = self.clone();
        shuffle_segment(&mut child.ascending, rng);
        child
    }

    /// Copies the tour and uniformly permutes a random closed window
    /// `[s, e]` of the descending chain. The ascending chain is untouched.
    pub fn mutate_descending_segment<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut child = self.clone();
        shuffle_segment(&mut child.descending, rng);
        child
    }

    /// Segment crossover between the two chains.
    ///
    /// # Algorithm
    ///
    /// 1. Pick a window `[s_up, e_up]` of the ascending chain and an
    ///    independent window `[s_down, e_down]` of the descending chain
    /// 2. Pool the points of both windows and shuffle the pool
    /// 3. Ascending chain: positions outside the window are copied; for each
    ///    position inside it a fair coin decides between taking the next
    ///    pooled point and leaving the slot out
    /// 4. Descending chain: positions before `s_down` are copied, then every
    ///    point still in the pool, then the positions after `e_down`
    ///
    /// Each pooled point is placed exactly once (step 3 never needs more
    /// points than the pool holds, step 4 drains the rest), so the child is
    /// a permutation whenever the parent is. The ascending chain never
    /// grows; the descending chain absorbs what it gives up.
    pub fn crossover<R: Rng>(&self, rng: &mut R) -> Tour {
        let up = random_segment(self.ascending.len(), rng);
        let down = random_segment(self.descending.len(), rng);

        let mut pool = Vec::new();
        if let Some((s, e)) = up {
            pool.extend_from_slice(&self.ascending[s..=e]);
        }
        if let Some((s, e)) = down {
            pool.extend_from_slice(&self.descending[s..=e]);
        }
        pool.shuffle(rng);
        let mut pool = pool.into_iter();

        let mut ascending = Vec::with_capacity(self.ascending.len());
        for (pos, &idx) in self.ascending.iter().enumerate() {
            match up {
                Some((s, e)) if (s..=e).contains(&pos) => {
                    if rng.random_bool(0.5) {
                        if let Some(p) = pool.next() {
                            ascending.push(p);
                        }
                    }
                }
                _ => ascending.push(idx),
            }
        }

        let mut descending = Vec::with_capacity(self.descending.len() + pool.len());
        match down {
            Some((s, e)) => {
                descending.extend_from_slice(&self.descending[..s]);
                descending.extend(pool);
                descending.extend_from_slice(&self.descending[e + 1..]);
            }
            None => descending.extend(pool),
        }

        Tour::new(ascending, descending)
    }
}

fn shuffle_segment<R: Rng>(chain: &mut [usize], rng: &mut R) {
    if let Some((s, e)) = random_segment(chain.len(), rng) {
        chain[s..=e].shuffle(rng);
    }
}
