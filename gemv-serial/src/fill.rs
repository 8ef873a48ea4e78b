use gemv_core::{MatrixMut, VectorMut};
use num_complex::Complex;

/// One uniformly distributed sample per scalar domain, drawn from an
/// explicitly threaded generator. Determinism comes from the caller seeding
/// the generator; there is no process-wide state.
pub trait FillRandom: Sized {
    /// Draws a value with magnitude per component at most `bound`.
    fn fill_random(rng: &mut fastrand::Rng, bound: f64) -> Self;
}

impl FillRandom for f32 {
    fn fill_random(rng: &mut fastrand::Rng, bound: f64) -> Self {
        ((rng.f64() * 2.0 - 1.0) * bound) as f32
    }
}

impl FillRandom for f64 {
    fn fill_random(rng: &mut fastrand::Rng, bound: f64) -> Self {
        (rng.f64() * 2.0 - 1.0) * bound
    }
}

impl FillRandom for i32 {
    fn fill_random(rng: &mut fastrand::Rng, bound: f64) -> Self {
        let b = bound as i32;
        rng.i32(-b..=b)
    }
}

impl FillRandom for Complex<f32> {
    fn fill_random(rng: &mut fastrand::Rng, bound: f64) -> Self {
        Complex::new(f32::fill_random(rng, bound), f32::fill_random(rng, bound))
    }
}

impl FillRandom for Complex<f64> {
    fn fill_random(rng: &mut fastrand::Rng, bound: f64) -> Self {
        Complex::new(f64::fill_random(rng, bound), f64::fill_random(rng, bound))
    }
}

/// Fills every logical element of `v` with fresh samples.
pub fn fill_vector<V>(rng: &mut fastrand::Rng, bound: f64, v: &mut V)
where
    V: VectorMut,
    V::Value: FillRandom,
{
    for i in 0..v.len() {
        v.set(i, V::Value::fill_random(rng, bound));
    }
}

/// Fills every logical element of `m`, row by row.
pub fn fill_matrix<M>(rng: &mut fastrand::Rng, bound: f64, m: &mut M)
where
    M: MatrixMut,
    M::Value: FillRandom,
{
    let (rows, cols) = m.dims();
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, M::Value::fill_random(rng, bound));
        }
    }
}
