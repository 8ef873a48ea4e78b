use crate::error::GemvError;
use crate::scalar::Scalar;
use crate::traits::{Matrix, MatrixMut};
use crate::vector::VectorView;

/// Number of storage elements a strided `rows x cols` view reaches into.
/// Degenerate shapes reach into nothing.
fn required_span(rows: usize, cols: usize, row_stride: usize, col_stride: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (rows - 1) * row_stride + (cols - 1) * col_stride + 1
    }
}

fn check_geometry(
    len: usize,
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
) -> Result<(), GemvError> {
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    if rows > 1 && row_stride == 0 {
        return Err(GemvError::InvalidDimensions(
            "Row stride must be non-zero for a matrix with more than one row".to_string(),
        ));
    }
    if cols > 1 && col_stride == 0 {
        return Err(GemvError::InvalidDimensions(
            "Column stride must be non-zero for a matrix with more than one column".to_string(),
        ));
    }
    let span = required_span(rows, cols, row_stride, col_stride);
    if len < span {
        return Err(GemvError::InvalidDimensions(format!(
            "Storage length ({}) does not cover a {}x{} view with strides ({}, {})",
            len, rows, cols, row_stride, col_stride
        )));
    }
    Ok(())
}

/// Read-only 2-D view over externally owned storage.
///
/// The view maps logical index `(i, j)` to physical offset
/// `i * row_stride + j * col_stride`; row-major, column-major, and
/// arbitrarily strided placements are all the same code path. The view never
/// owns or reallocates storage.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T: Scalar> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl<'a, T: Scalar> MatrixView<'a, T> {
    /// Creates a view with explicit strides. Fails if the strided span does
    /// not fit in `data`.
    pub fn new(
        data: &'a [T],
        rows: usize,
        cols: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> Result<Self, GemvError> {
        check_geometry(data.len(), rows, cols, row_stride, col_stride)?;
        Ok(Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
        })
    }

    /// Creates a row-major view: rows are contiguous.
    pub fn row_major(data: &'a [T], rows: usize, cols: usize) -> Result<Self, GemvError> {
        Self::new(data, rows, cols, cols, 1)
    }

    /// Creates a column-major view: columns are contiguous.
    pub fn col_major(data: &'a [T], rows: usize, cols: usize) -> Result<Self, GemvError> {
        Self::new(data, rows, cols, 1, rows)
    }

    /// Extracts column `col` as a 1-D view over the same storage, without
    /// copying. The resulting vector inherits the row stride, so a column of
    /// a row-major block is itself strided.
    pub fn column(&self, col: usize) -> Result<VectorView<'a, T>, GemvError> {
        if col >= self.cols {
            return Err(GemvError::InvalidDimensions(format!(
                "Column index ({}) out of bounds for a matrix with {} columns",
                col, self.cols
            )));
        }
        let offset = col * self.col_stride;
        let rest = self.data.get(offset..).unwrap_or(&[]);
        VectorView::new(rest, self.rows, self.row_stride)
    }

    // --- Getters ---
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn col_stride(&self) -> usize {
        self.col_stride
    }
}

impl<T: Scalar> Matrix for MatrixView<'_, T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[row * self.row_stride + col * self.col_stride]
    }
}

/// Mutable 2-D view over externally owned storage.
///
/// Implements the same read access as [`MatrixView`]; in addition elements
/// can be written. A read-only alias of the same storage is available through
/// [`MatrixViewMut::as_view`] without copying.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T: Scalar> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl<'a, T: Scalar> MatrixViewMut<'a, T> {
    /// Creates a mutable view with explicit strides. Fails if the strided
    /// span does not fit in `data`.
    pub fn new(
        data: &'a mut [T],
        rows: usize,
        cols: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> Result<Self, GemvError> {
        check_geometry(data.len(), rows, cols, row_stride, col_stride)?;
        Ok(Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
        })
    }

    /// Creates a mutable row-major view.
    pub fn row_major(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self, GemvError> {
        Self::new(data, rows, cols, cols, 1)
    }

    /// Creates a mutable column-major view.
    pub fn col_major(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self, GemvError> {
        Self::new(data, rows, cols, 1, rows)
    }

    /// Returns a read-only view aliasing the same storage. No copy is made;
    /// the alias cannot outlive this view's borrow.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
        }
    }
}

impl<T: Scalar> Matrix for MatrixViewMut<'_, T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[row * self.row_stride + col * self.col_stride]
    }
}

impl<T: Scalar> MatrixMut for MatrixViewMut<'_, T> {
    fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[row * self.row_stride + col * self.col_stride] = value;
    }
}
