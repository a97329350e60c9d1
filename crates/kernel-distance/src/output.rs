//! Distance output layouts
//!
//! Pairwise results come back either as the full symmetric `(N, N)` matrix or
//! as the compact upper triangle (diagonal included) flattened row by row:
//! row `i` contributes columns `i..N`, so the vector holds `N(N+1)/2` values.

use kernel_core::{ElementwiseArray, Error, Result};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Requested shape of a pairwise result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// Full symmetric `(N, N)` matrix
    Matrix,
    /// Upper triangle including the diagonal, row-major
    #[default]
    Compact,
}

impl OutputLayout {
    /// Layout selected by the `matrix` flag of the call surface
    pub fn from_matrix_flag(matrix: bool) -> Self {
        if matrix {
            OutputLayout::Matrix
        } else {
            OutputLayout::Compact
        }
    }
}

/// Length of the compact form for `n` points
#[inline]
pub fn compact_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Offset of entry `(i, j)` with `i <= j < n` inside the compact form
#[inline]
fn compact_index(n: usize, i: usize, j: usize) -> usize {
    // rows 0..i hold n, n-1, ..., n-i+1 entries
    i * (2 * n - i + 1) / 2 + (j - i)
}

/// Upper triangle of a symmetric pairwise matrix, diagonal included
///
/// Read-only once built: the values are exposed as a slice and the only
/// transforms produce new values.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactDistances {
    values: Vec<f64>,
    n_points: usize,
}

impl CompactDistances {
    /// Extract the upper triangle of a square matrix
    pub fn from_matrix(matrix: &DMatrix<f64>) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(Error::size_mismatch(rows, cols, "square pairwise matrix"));
        }
        Ok(Self::from_square(matrix))
    }

    /// Upper triangle of a matrix already known to be square
    pub(crate) fn from_square(matrix: &DMatrix<f64>) -> Self {
        let n = matrix.nrows();
        debug_assert_eq!(n, matrix.ncols());
        let mut values = Vec::with_capacity(compact_len(n));
        for i in 0..n {
            for j in i..n {
                values.push(matrix[(i, j)]);
            }
        }
        Self::from_parts(values, n)
    }

    /// Wrap values already laid out as the triangle of `n_points` points
    pub(crate) fn from_parts(values: Vec<f64>, n_points: usize) -> Self {
        debug_assert_eq!(values.len(), compact_len(n_points));
        Self { values, n_points }
    }

    /// Wrap an already flattened upper triangle
    ///
    /// The length must be triangular, `N(N+1)/2` for some `N`.
    pub fn try_from_vec(values: Vec<f64>) -> Result<Self> {
        let n_points = triangular_root(values.len()).ok_or_else(|| {
            let lower = triangular_floor(values.len());
            Error::size_mismatch(compact_len(lower + 1), values.len(), "compact pairwise vector")
        })?;
        Ok(Self { values, n_points })
    }

    /// Number of points the triangle covers
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry `(i, j)`, mirrored when `i > j`
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n_points || j >= self.n_points {
            return None;
        }
        let (r, c) = if i <= j { (i, j) } else { (j, i) };
        self.values.get(compact_index(self.n_points, r, c)).copied()
    }

    /// Stored values in row-major triangle order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over stored values
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Rebuild the full symmetric matrix by mirroring across the diagonal
    pub fn to_matrix(&self) -> DMatrix<f64> {
        let n = self.n_points;
        let mut matrix = DMatrix::zeros(n, n);
        let mut values = self.values.iter();
        for i in 0..n {
            for j in i..n {
                if let Some(&v) = values.next() {
                    matrix[(i, j)] = v;
                    matrix[(j, i)] = v;
                }
            }
        }
        matrix
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl ElementwiseArray for CompactDistances {
    fn element_count(&self) -> usize {
        self.values.len()
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            values: self.values.map_elements(f),
            n_points: self.n_points,
        }
    }
}

/// Largest `n` with `n(n+1)/2 <= len`
fn triangular_floor(len: usize) -> usize {
    let mut n = ((2.0 * len as f64).sqrt()) as usize;
    while compact_len(n) > len {
        n -= 1;
    }
    while compact_len(n + 1) <= len {
        n += 1;
    }
    n
}

/// `n` with `n(n+1)/2 == len`, if any
fn triangular_root(len: usize) -> Option<usize> {
    let n = triangular_floor(len);
    (compact_len(n) == len).then_some(n)
}

/// Result of a pairwise distance computation
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceOutput {
    /// Full symmetric matrix
    Matrix(DMatrix<f64>),
    /// Compact upper triangle
    Compact(CompactDistances),
}

impl DistanceOutput {
    /// Number of points covered
    pub fn n_points(&self) -> usize {
        match self {
            DistanceOutput::Matrix(m) => m.nrows(),
            DistanceOutput::Compact(c) => c.n_points(),
        }
    }

    /// Layout of this output
    pub fn layout(&self) -> OutputLayout {
        match self {
            DistanceOutput::Matrix(_) => OutputLayout::Matrix,
            DistanceOutput::Compact(_) => OutputLayout::Compact,
        }
    }

    /// Borrow the matrix form, if that is the layout
    pub fn as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            DistanceOutput::Matrix(m) => Some(m),
            DistanceOutput::Compact(_) => None,
        }
    }

    /// Borrow the compact form, if that is the layout
    pub fn as_compact(&self) -> Option<&CompactDistances> {
        match self {
            DistanceOutput::Matrix(_) => None,
            DistanceOutput::Compact(c) => Some(c),
        }
    }

    /// Full matrix, expanding the compact form when needed
    pub fn into_matrix(self) -> DMatrix<f64> {
        match self {
            DistanceOutput::Matrix(m) => m,
            DistanceOutput::Compact(c) => c.to_matrix(),
        }
    }
}

impl ElementwiseArray for DistanceOutput {
    fn element_count(&self) -> usize {
        match self {
            DistanceOutput::Matrix(m) => m.element_count(),
            DistanceOutput::Compact(c) => c.element_count(),
        }
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        match self {
            DistanceOutput::Matrix(m) => DistanceOutput::Matrix(m.map_elements(f)),
            DistanceOutput::Compact(c) => DistanceOutput::Compact(c.map_elements(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 3, &[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 2.0, 3.0, 0.0])
    }

    #[test]
    fn test_compact_len() {
        assert_eq!(compact_len(0), 0);
        assert_eq!(compact_len(1), 1);
        assert_eq!(compact_len(2), 3);
        assert_eq!(compact_len(3), 6);
    }

    #[test]
    fn test_from_matrix_row_major_triangle() {
        let compact = CompactDistances::from_matrix(&sample_matrix()).unwrap();
        assert_eq!(compact.as_slice(), &[0.0, 1.0, 2.0, 0.0, 3.0, 0.0]);
        assert_eq!(compact.n_points(), 3);
        assert_eq!(compact.len(), 6);
    }

    #[test]
    fn test_get_mirrors() {
        let compact = CompactDistances::from_matrix(&sample_matrix()).unwrap();
        assert_eq!(compact.get(0, 2), Some(2.0));
        assert_eq!(compact.get(2, 0), Some(2.0));
        assert_eq!(compact.get(1, 2), Some(3.0));
        assert_eq!(compact.get(2, 2), Some(0.0));
        assert_eq!(compact.get(3, 0), None);
    }

    #[test]
    fn test_round_trip() {
        let m = sample_matrix();
        let compact = CompactDistances::from_matrix(&m).unwrap();
        assert_eq!(compact.to_matrix(), m);
    }

    #[test]
    fn test_non_square_rejected() {
        let m = DMatrix::<f64>::zeros(2, 3);
        assert!(matches!(
            CompactDistances::from_matrix(&m),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_try_from_vec() {
        let compact = CompactDistances::try_from_vec(vec![0.0, 1.0, 0.0]).unwrap();
        assert_eq!(compact.n_points(), 2);
        assert_eq!(CompactDistances::try_from_vec(Vec::new()).unwrap().n_points(), 0);

        let err = CompactDistances::try_from_vec(vec![0.0; 4]).unwrap_err();
        assert_eq!(err, Error::size_mismatch(6, 4, "compact pairwise vector"));
    }

    #[test]
    fn test_triangular_root_large() {
        for n in [10usize, 999, 4096] {
            assert_eq!(triangular_root(compact_len(n)), Some(n));
            assert_eq!(triangular_root(compact_len(n) + 1), None);
        }
    }

    #[test]
    fn test_output_accessors() {
        let m = sample_matrix();
        let dense = DistanceOutput::Matrix(m.clone());
        assert_eq!(dense.n_points(), 3);
        assert_eq!(dense.layout(), OutputLayout::Matrix);
        assert!(dense.as_compact().is_none());

        let compact = DistanceOutput::Compact(CompactDistances::from_matrix(&m).unwrap());
        assert_eq!(compact.n_points(), 3);
        assert_eq!(compact.element_count(), 6);
        assert_eq!(compact.into_matrix(), m);
    }

    #[test]
    fn test_map_keeps_layout() {
        let compact = DistanceOutput::Compact(CompactDistances::from_matrix(&sample_matrix()).unwrap());
        let mapped = compact.map_elements(|d| d + 1.0);
        assert_eq!(mapped.layout(), OutputLayout::Compact);
        assert_eq!(mapped.as_compact().unwrap().as_slice(), &[1.0, 2.0, 3.0, 1.0, 4.0, 1.0]);
    }

    #[test]
    fn test_layout_flag_and_serde() {
        assert_eq!(OutputLayout::from_matrix_flag(true), OutputLayout::Matrix);
        assert_eq!(OutputLayout::from_matrix_flag(false), OutputLayout::Compact);
        assert_eq!(OutputLayout::default(), OutputLayout::Compact);
        assert_eq!(serde_json::to_string(&OutputLayout::Matrix).unwrap(), "\"matrix\"");
    }
}
