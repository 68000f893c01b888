use crate::shape::MatShape;

/// A dense row-major matrix of f64 values.
///
/// The buffer is owned by the caller for its full lifetime; kernels borrow
/// it read-only (A, B) or read-write (C) for the duration of one call.
/// Kernels accumulate into C and never initialize it, so accumulation
/// targets are created with [`Matrix::zeros`] or reset with
/// [`Matrix::fill_zero`] between passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    shape: MatShape,
}

impl Matrix {
    /// Create a matrix from row-major data and dimensions.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        let shape = MatShape::new(rows, cols);
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Matrix { data, shape }
    }

    /// Create a zero-filled matrix with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![0.0; rows * cols],
            shape: MatShape::new(rows, cols),
        }
    }

    /// Create a matrix from explicit rows.
    ///
    /// # Panics
    /// Panics if the rows have differing lengths.
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            assert_eq!(row.len(), n_cols, "all rows must have the same length");
            data.extend_from_slice(row);
        }
        Matrix::new(data, n_rows, n_cols)
    }

    /// Returns the matrix's shape.
    pub fn shape(&self) -> MatShape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Returns the element at (r, c).
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[self.shape.index(r, c)]
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the underlying row-major data mutably.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Reset every element to zero, preparing an accumulation target.
    pub fn fill_zero(&mut self) {
        self.data.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic]
    fn test_new_length_mismatch_panics() {
        let _m = Matrix::new(vec![1.0, 2.0], 2, 3);
    }

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(3, 2);
        assert_eq!(m.data(), &[0.0; 6]);
        assert_eq!(m.shape(), MatShape::new(3, 2));
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn test_from_rows_empty() {
        let m = Matrix::from_rows(&[]);
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
        assert!(m.data().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_from_rows_ragged_panics() {
        let _m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]);
    }

    #[test]
    fn test_fill_zero() {
        let mut m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        m.fill_zero();
        assert_eq!(m.data(), &[0.0; 4]);
    }
}
