use bytemuck::Zeroable;
use gemv_core::{Layout, Scalar, TransposeMode};

/// One fully specified verification case: output shape, transpose mode, and
/// the physical layout of each operand. Immutable once constructed; the
/// scalar domain is chosen by the caller running it.
///
/// `rows` and `cols` describe `op(A)`: `y` has length `rows`, `x` has length
/// `cols`, and the stored matrix has its dimensions swapped under the
/// transposed modes.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub rows: usize,
    pub cols: usize,
    pub mode: TransposeMode,
    pub layout_a: Layout,
    pub layout_x: Layout,
    pub layout_y: Layout,
}

impl Scenario {
    /// Dimensions of the stored matrix `A` (before `op` is applied).
    pub fn a_dims(&self) -> (usize, usize) {
        if self.mode.is_transposed() {
            (self.cols, self.rows)
        } else {
            (self.rows, self.cols)
        }
    }

    /// Human-readable identification, sufficient to reproduce the case.
    pub fn label(&self) -> String {
        format!(
            "gemv('{}') {}x{} A={:?} x={:?} y={:?}",
            self.mode.as_char(),
            self.rows,
            self.cols,
            self.layout_a,
            self.layout_x,
            self.layout_y
        )
    }
}

/// Output shapes exercised by the sweep: degenerate (zero rows against a
/// long contraction), non-square, and square.
pub const SHAPES: [(usize, usize); 3] = [(0, 1024), (13, 1024), (124, 124)];

const MODES: [TransposeMode; 3] = [
    TransposeMode::NoTranspose,
    TransposeMode::Transpose,
    TransposeMode::ConjugateTranspose,
];

const LAYOUTS: [Layout; 3] = [Layout::RowMajor, Layout::ColMajor, Layout::Strided];

/// Enumerates every combination of shape, mode, and per-operand layout.
pub fn scenarios() -> Vec<Scenario> {
    let mut cases = Vec::new();
    for &(rows, cols) in &SHAPES {
        for &mode in &MODES {
            for &layout_a in &LAYOUTS {
                for &layout_x in &LAYOUTS {
                    for &layout_y in &LAYOUTS {
                        cases.push(Scenario {
                            rows,
                            cols,
                            mode,
                            layout_a,
                            layout_x,
                            layout_y,
                        });
                    }
                }
            }
        }
    }
    cases
}

/// Backing storage plus strides for a matrix operand under `layout`.
///
/// The strided variant interleaves the logical elements at even offsets of a
/// double-sized block, so neither dimension is contiguous.
pub fn matrix_storage<T: Scalar>(
    layout: Layout,
    rows: usize,
    cols: usize,
) -> (Vec<T>, usize, usize) {
    match layout {
        Layout::RowMajor => (vec![T::zeroed(); rows * cols], cols, 1),
        Layout::ColMajor => (vec![T::zeroed(); rows * cols], 1, rows),
        Layout::Strided => (vec![T::zeroed(); 2 * rows * cols], 2 * cols, 2),
    }
}

/// Backing storage plus stride for a vector operand under `layout`.
///
/// The strided variant models column 0 of an `n x 2` row-major block, the
/// classic subview case.
pub fn vector_storage<T: Scalar>(layout: Layout, len: usize) -> (Vec<T>, usize) {
    match layout {
        Layout::RowMajor | Layout::ColMajor => (vec![T::zeroed(); len], 1),
        Layout::Strided => (vec![T::zeroed(); 2 * len], 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemv_core::MatrixView;

    #[test]
    fn sweep_covers_all_combinations() {
        // 3 shapes x 3 modes x 27 layout pairings.
        assert_eq!(scenarios().len(), 243);
    }

    #[test]
    fn stored_dims_swap_under_transposition() {
        let s = Scenario {
            rows: 13,
            cols: 1024,
            mode: TransposeMode::Transpose,
            layout_a: Layout::RowMajor,
            layout_x: Layout::RowMajor,
            layout_y: Layout::RowMajor,
        };
        assert_eq!(s.a_dims(), (1024, 13));
    }

    #[test]
    fn strided_matrix_storage_is_viewable() {
        let (store, rs, cs) = matrix_storage::<f32>(Layout::Strided, 3, 5);
        assert_eq!(store.len(), 30);
        assert!(MatrixView::new(&store, 3, 5, rs, cs).is_ok());
    }

    #[test]
    fn degenerate_shapes_allocate_nothing() {
        let (store, _, _) = matrix_storage::<f64>(Layout::Strided, 0, 1024);
        assert!(store.is_empty());
        let (store, _) = vector_storage::<f64>(Layout::RowMajor, 0);
        assert!(store.is_empty());
    }
}
