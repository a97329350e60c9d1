//! Point sets
//!
//! A point set is a dense `(count, dimension)` array stored row-major, so
//! every point is a contiguous slice that the distance primitives can consume
//! directly.

use kernel_core::{Error, Numeric, Result};
use nalgebra::DMatrix;

/// Dense `(count, dimension)` array of points
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T: Numeric = f64> {
    data: Vec<T>,
    count: usize,
    dimension: usize,
}

impl<T: Numeric> PointSet<T> {
    /// Build from a row-major buffer of `count * dimension` coordinates
    pub fn from_row_major(count: usize, dimension: usize, data: Vec<T>) -> Result<Self> {
        let expected = count
            .checked_mul(dimension)
            .ok_or_else(|| Error::size_mismatch(usize::MAX, data.len(), "point buffer"))?;
        if data.len() != expected {
            return Err(Error::size_mismatch(expected, data.len(), "point buffer"));
        }
        Ok(Self {
            data,
            count,
            dimension,
        })
    }

    /// Build from one slice per point
    ///
    /// The dimension is taken from the first row; every other row must match.
    /// An empty row list gives an empty set with no recorded dimension, which
    /// [`PointSet::concat`] joins with a set of any dimension. Use
    /// [`PointSet::from_row_major`] for an empty set of a fixed dimension.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * dimension);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dimension {
                return Err(Error::size_mismatch(dimension, row.len(), "point row length"));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            count: rows.len(),
            dimension,
        })
    }

    /// Build from a matrix whose rows are points
    pub fn from_matrix(matrix: &DMatrix<T>) -> Self {
        let (count, dimension) = matrix.shape();
        let mut data = Vec::with_capacity(count * dimension);
        for row in matrix.row_iter() {
            data.extend(row.iter().copied());
        }
        Self {
            data,
            count,
            dimension,
        }
    }

    /// Concatenate two point sets, `self` first
    ///
    /// Fails with `ShapeMismatch` when the dimensions differ. A set with no
    /// points and dimension 0 takes the dimension of the other set; an empty
    /// set with an explicit dimension is still checked.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        let dimension = if self.is_dimensionless() {
            other.dimension
        } else if other.is_dimensionless() || other.dimension == self.dimension {
            self.dimension
        } else {
            return Err(Error::size_mismatch(
                self.dimension,
                other.dimension,
                "point dimension",
            ));
        };
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Self {
            data,
            count: self.count + other.count,
            dimension,
        })
    }

    fn is_dimensionless(&self) -> bool {
        self.count == 0 && self.dimension == 0
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the set holds no points
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Coordinates per point
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Coordinates of point `i`
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &[T] {
        assert!(i < self.count, "point index {i} out of bounds for {} points", self.count);
        &self.data[i * self.dimension..(i + 1) * self.dimension]
    }

    /// Iterate over points in order
    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.count).map(move |i| self.point(i))
    }

    /// Row-major coordinate buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Numeric> From<&DMatrix<T>> for PointSet<T> {
    fn from(matrix: &DMatrix<T>) -> Self {
        Self::from_matrix(matrix)
    }
}
