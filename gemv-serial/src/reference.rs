use gemv_core::{Matrix, Scalar, TransposeMode, Vector};
use num_traits::Zero;

/// Straightforward recomputation of `alpha * op(A) * x + beta * y`, used as
/// ground truth when certifying the kernel.
///
/// This is intentionally a separate code path from [`crate::gemv::gemv`]:
/// one explicit loop nest per mode, reading logical entries directly and
/// collecting into an owned `Vec`. It shares no dispatch or accumulation
/// code with the kernel, so a systematic error in either one shows up as a
/// disagreement.
///
/// `y` is read, never written; callers pass the output vector's original
/// contents. Dimensions are assumed consistent with `mode`.
pub fn reference_gemv<A, X, Y>(
    mode: TransposeMode,
    alpha: A::Value,
    a: &A,
    x: &X,
    beta: A::Value,
    y: &Y,
) -> Vec<A::Value>
where
    A: Matrix,
    X: Vector<Value = A::Value>,
    Y: Vector<Value = A::Value>,
{
    let (rows, cols) = a.dims();
    match mode {
        TransposeMode::NoTranspose => (0..rows)
            .map(|i| {
                let mut sum = A::Value::zero();
                for j in 0..cols {
                    sum += a.get(i, j) * x.get(j);
                }
                beta * y.get(i) + alpha * sum
            })
            .collect(),
        TransposeMode::Transpose => (0..cols)
            .map(|i| {
                let mut sum = A::Value::zero();
                for j in 0..rows {
                    sum += a.get(j, i) * x.get(j);
                }
                beta * y.get(i) + alpha * sum
            })
            .collect(),
        TransposeMode::ConjugateTranspose => (0..cols)
            .map(|i| {
                let mut sum = A::Value::zero();
                for j in 0..rows {
                    sum += a.get(j, i).conj() * x.get(j);
                }
                beta * y.get(i) + alpha * sum
            })
            .collect(),
    }
}
