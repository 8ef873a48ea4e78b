use crate::scalar::Scalar;
use std::fmt::Debug;

/// Generic read access to a logical 2-D entity.
///
/// Implementations may be contiguous or strided; the physical layout is an
/// implementation detail. `get(i, j)` must return the mathematically correct
/// entry for every in-bounds index pair, in O(1).
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements.
    type Value: Scalar;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Reads the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn get(&self, row: usize, col: usize) -> Self::Value;
}

/// Write access on top of [`Matrix`]. Only types backed by mutable storage
/// implement this; read-only views reject writes at type-check time.
pub trait MatrixMut: Matrix {
    /// Writes the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn set(&mut self, row: usize, col: usize, value: Self::Value);
}

/// Generic read access to a logical 1-D entity, possibly strided.
pub trait Vector: Debug {
    /// The underlying numeric type of the vector elements.
    type Value: Scalar;

    /// Returns the number of elements in the vector.
    fn len(&self) -> usize;

    /// Checks if the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> Self::Value;
}

/// Write access on top of [`Vector`].
pub trait VectorMut: Vector {
    /// Writes the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn set(&mut self, index: usize, value: Self::Value);
}

// Owned vectors participate directly, which lets independently computed
// results feed the same reductions as view-backed operands.
impl<T: Scalar> Vector for Vec<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Scalar> VectorMut for Vec<T> {
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}
