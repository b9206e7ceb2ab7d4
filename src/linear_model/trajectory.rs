use crate::{Matrix, Vector};

/// Every coefficient vector a solver visited, starting with the initial one.
///
/// Append-only; all entries share the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<Vector>,
}

impl Trajectory {
    pub(crate) fn with_capacity(start: Vector, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity);
        points.push(start);
        Self { points }
    }

    pub(crate) fn push(&mut self, point: Vector) {
        debug_assert_eq!(point.len(), self.points[0].len());
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Vector> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Vector> {
        self.points.last()
    }

    pub fn get(&self, iteration: usize) -> Option<&Vector> {
        self.points.get(iteration)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.points.iter()
    }

    /// Stacks the iterates as rows: row `k` is the point after `k` iterations.
    pub fn to_matrix(&self) -> Matrix {
        let dim = self.points.first().map_or(0, |p| p.len());
        let mut matrix = Matrix::zeros((self.points.len(), dim));
        for (mut row, point) in matrix.rows_mut().into_iter().zip(&self.points) {
            row.assign(point);
        }
        matrix
    }

    pub fn into_inner(self) -> Vec<Vector> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
