use gemv_core::{GemvError, Matrix, Scalar, TransposeMode, Vector, VectorMut};
use num_traits::Zero;

/// Serial dense matrix-vector product `y := alpha * op(A) * x + beta * y`.
///
/// `mode` selects `op` using the BLAS letters: `'N'` for `A`, `'T'` for
/// `A^T`, `'C'` for `conj(A^T)`. With `A` logically `rows x cols`, `x` must
/// have length `cols` under `'N'` and length `rows` otherwise, and `y` must
/// match the output dimension; mismatches fail before `y` is touched.
///
/// The operation is synchronous and mutates `y` in place, one index at a
/// time: `y[i]` is read once, combined with the accumulated dot product, and
/// written once. `A` and `x` are only read, so they may be shared across
/// concurrent calls that write disjoint outputs.
///
/// Results do not depend on the physical layout of any operand, nor on
/// whether `A` and `x` are passed through read-only or mutable view types.
pub fn gemv<A, X, Y>(
    mode: char,
    alpha: A::Value,
    a: &A,
    x: &X,
    beta: A::Value,
    y: &mut Y,
) -> Result<(), GemvError>
where
    A: Matrix,
    X: Vector<Value = A::Value>,
    Y: VectorMut<Value = A::Value>,
{
    let mode = TransposeMode::from_char(mode)?;

    let (out_len, in_len) = if mode.is_transposed() {
        (a.cols(), a.rows())
    } else {
        (a.rows(), a.cols())
    };
    if x.len() != in_len {
        return Err(GemvError::InvalidDimensions(format!(
            "Input vector length ({}) does not match op(A) columns ({})",
            x.len(),
            in_len
        )));
    }
    if y.len() != out_len {
        return Err(GemvError::InvalidDimensions(format!(
            "Output vector length ({}) does not match op(A) rows ({})",
            y.len(),
            out_len
        )));
    }

    for i in 0..out_len {
        // Accumulation starts from the domain's own additive identity.
        let mut acc = A::Value::zero();
        for j in 0..in_len {
            let a_ij = match mode {
                TransposeMode::NoTranspose => a.get(i, j),
                TransposeMode::Transpose => a.get(j, i),
                TransposeMode::ConjugateTranspose => a.get(j, i).conj(),
            };
            acc += a_ij * x.get(j);
        }
        let updated = beta * y.get(i) + alpha * acc;
        y.set(i, updated);
    }

    Ok(())
}
