use crate::error::GemvError;

/// Physical placement strategy for operand storage.
///
/// This is a description of how a test or a caller lays data out in memory,
/// used when constructing views. The views themselves carry explicit strides,
/// so algorithm code never inspects this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Elements of a row are contiguous (C convention).
    RowMajor,
    /// Elements of a column are contiguous (Fortran convention).
    ColMajor,
    /// Neither dimension is contiguous, e.g. a slice out of a wider block.
    Strided,
}

/// Selector for `op(A)` in `y := alpha * op(A) * x + beta * y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransposeMode {
    /// `op(A) = A`
    NoTranspose,
    /// `op(A) = A^T`
    Transpose,
    /// `op(A) = conj(A^T)`
    ConjugateTranspose,
}

impl TransposeMode {
    /// Parses the BLAS mode letter. Anything outside 'N', 'T', 'C' is an
    /// error, never a silent default.
    pub fn from_char(mode: char) -> Result<Self, GemvError> {
        match mode {
            'N' => Ok(TransposeMode::NoTranspose),
            'T' => Ok(TransposeMode::Transpose),
            'C' => Ok(TransposeMode::ConjugateTranspose),
            other => Err(GemvError::InvalidMode(other)),
        }
    }

    /// The BLAS mode letter for this selector.
    pub fn as_char(self) -> char {
        match self {
            TransposeMode::NoTranspose => 'N',
            TransposeMode::Transpose => 'T',
            TransposeMode::ConjugateTranspose => 'C',
        }
    }

    /// Whether `op` swaps the row and column indices of `A`.
    pub fn is_transposed(self) -> bool {
        !matches!(self, TransposeMode::NoTranspose)
    }
}
