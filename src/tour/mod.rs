//! Two-chain tour representation.
//!
//! A [`Tour`] splits a closed tour into an ascending chain, which leaves the
//! leftmost point heading right, and a descending chain, which returns
//! toward the start. Visiting order is the ascending chain followed by the
//! descending chain; the tour closes from the last point of the descending
//! chain back to the first point of the ascending chain.
//!
//! Every point index `0..n` appears exactly once across the two chains.
//! The operators in [`operators`] allocate new tours and preserve that
//! invariant.

pub mod operators;

/// A closed tour stored as two index chains.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    ascending: Vec<usize>,
    descending: Vec<usize>,
}

impl Tour {
    /// Creates a tour from its two chains.
    ///
    /// The chains are taken as given; use
    /// [`is_permutation_of`](Self::is_permutation_of) to validate.
    pub fn new(ascending: Vec<usize>, descending: Vec<usize>) -> Self {
        Self {
            ascending,
            descending,
        }
    }

    /// The outbound chain.
    pub fn ascending(&self) -> &[usize] {
        &self.ascending
    }

    /// The return chain.
    pub fn descending(&self) -> &[usize] {
        &self.descending
    }

    /// Total number of points on the tour.
    pub fn len(&self) -> usize {
        self.ascending.len() + self.descending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ascending.is_empty() && self.descending.is_empty()
    }

    /// Point indices in visiting order.
    pub fn visit_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.ascending.iter().chain(self.descending.iter()).copied()
    }

    /// Returns `true` if the chains together hold each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for idx in self.visit_order() {
            if idx >= n || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}
