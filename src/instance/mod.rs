//! Problem instance: sorted points and the evaluation budget.
//!
//! Points are sorted by `(x, y)` on construction and addressed by their
//! sorted position everywhere else in the crate. The original identifier
//! is kept only for reporting.

mod budget;
pub mod parser;

pub use budget::Budget;

use crate::error::LoadError;
use std::path::Path;
use tracing::info;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Identifier from the input file.
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Sorted point set plus the shared evaluation budget.
#[derive(Debug, Clone)]
pub struct Instance {
    points: Vec<Point>,
    budget: Budget,
    evaluations: u64,
}

impl Instance {
    /// Builds an instance from raw points, sorting them stably by `x`
    /// then `y`.
    ///
    /// # Errors
    ///
    /// [`LoadError::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite.
    pub fn new(mut points: Vec<Point>, budget: Budget) -> Result<Self, LoadError> {
        if let Some(bad) = points
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(LoadError::NonFiniteCoordinate { id: bad.id });
        }
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        Ok(Self {
            points,
            budget,
            evaluations: 0,
        })
    }

    /// Reads and parses an instance file.
    pub fn from_file<P: AsRef<Path>>(path: P, budget: Budget) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let instance = Self::new(parser::parse_instance(&text)?, budget)?;
        info!(
            path = %path.as_ref().display(),
            n = instance.len(),
            "instance loaded"
        );
        Ok(instance)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in sorted order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point at sorted index `i`.
    pub fn point(&self, i: usize) -> &Point {
        &self.points[i]
    }

    /// Distance between sorted points `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.points[i].distance_to(&self.points[j])
    }

    /// Takes one unit of budget. Returns whether one was available.
    pub fn consume_budget(&mut self) -> bool {
        let ok = self.budget.consume();
        if ok {
            self.evaluations += 1;
        }
        ok
    }

    /// Returns `true` while evaluations remain.
    pub fn has_budget(&self) -> bool {
        !self.budget.is_exhausted()
    }

    /// Remaining budget.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Number of evaluations consumed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Exhausts the budget so the search stops at its next check.
    pub fn request_stop(&mut self) {
        self.budget.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(1, 1.0, 1.0),
            Point::new(2, 0.0, 1.0),
            Point::new(3, 1.0, 0.0),
            Point::new(4, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_points_sorted_by_x_then_y() {
        let instance = Instance::new(square(), Budget::Unbounded).unwrap();
        let ids: Vec<u64> = instance.points().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_duplicates() {
        let points = vec![
            Point::new(10, 2.0, 2.0),
            Point::new(11, 1.0, 1.0),
            Point::new(12, 2.0, 2.0),
        ];
        let instance = Instance::new(points, Budget::Unbounded).unwrap();
        let ids: Vec<u64> = instance.points().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![11, 10, 12]);
    }

    #[test]
    fn test_distance() {
        let points = vec![Point::new(0, 0.0, 0.0), Point::new(1, 3.0, 4.0)];
        let instance = Instance::new(points, Budget::Unbounded).unwrap();
        assert!((instance.distance(0, 1) - 5.0).abs() < 1e-12);
        assert!((instance.distance(1, 0) - 5.0).abs() < 1e-12);
        assert_eq!(instance.distance(1, 1), 0.0);
    }

    #[test]
    fn test_rejects_non_finite() {
        let points = vec![Point::new(0, 0.0, 0.0), Point::new(9, f64::NAN, 4.0)];
        let err = Instance::new(points, Budget::Unbounded).unwrap_err();
        assert!(matches!(err, LoadError::NonFiniteCoordinate { id: 9 }));
    }

    #[test]
    fn test_budget_counting_and_stop() {
        let mut instance = Instance::new(square(), Budget::Finite(3)).unwrap();
        assert!(instance.consume_budget());
        assert!(instance.consume_budget());
        assert_eq!(instance.evaluations(), 2);
        instance.request_stop();
        instance.request_stop();
        assert!(!instance.has_budget());
        assert!(!instance.consume_budget());
        assert_eq!(instance.evaluations(), 2);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.tsp");
        std::fs::write(
            &path,
            "NAME : tiny\nCOMMENT : test\nTYPE : TSP\nDIMENSION : 3\n\
             EDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n\
             1 5.0 5.0\n2 0.0 0.0\n3 2.5 1.0\nEOF\n",
        )
        .unwrap();
        let instance = Instance::from_file(&path, Budget::Unbounded).unwrap();
        assert_eq!(instance.len(), 3);
        assert_eq!(instance.point(0).id, 2);
        assert_eq!(instance.point(2).id, 1);
    }

    #[test]
    fn test_from_missing_file() {
        let err = Instance::from_file("/nonexistent/instance.tsp", Budget::Unbounded).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
