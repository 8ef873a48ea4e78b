use bytemuck::Pod;
use num_complex::Complex;
use num_traits::NumAssign;
use std::fmt::Debug;

/// Element domain of a matrix or vector: real floating point, complex
/// floating point, or integer.
///
/// The arithmetic the kernel needs (`+`, `*`, additive identity) comes in
/// through [`NumAssign`]; this trait adds the operations that differ per
/// domain: conjugation, magnitude, and the relative tolerance used when
/// comparing aggregated results.
pub trait Scalar:
    Copy + Debug + Default + Send + Sync + Pod + NumAssign + 'static
{
    /// Relative tolerance for aggregate comparisons in this domain.
    /// Zero for integer domains, where results must match exactly.
    const RELATIVE_TOLERANCE: f64;

    /// Complex conjugate. Identity for real and integer domains.
    fn conj(self) -> Self;

    /// Absolute value (complex norm) as `f64`.
    fn modulus(self) -> f64;

    /// Squared absolute value as `f64`. Computed without the intermediate
    /// square root where the domain allows it.
    fn norm_sqr(self) -> f64 {
        let m = self.modulus();
        m * m
    }

    /// Builds a scalar from a real value. Complex domains get a zero
    /// imaginary part; the integer domain truncates.
    fn from_real(value: f64) -> Self;
}

impl Scalar for f32 {
    const RELATIVE_TOLERANCE: f64 = 2e-5;

    fn conj(self) -> Self {
        self
    }

    fn modulus(self) -> f64 {
        f64::from(self.abs())
    }

    fn from_real(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    const RELATIVE_TOLERANCE: f64 = 1e-7;

    fn conj(self) -> Self {
        self
    }

    fn modulus(self) -> f64 {
        self.abs()
    }

    fn from_real(value: f64) -> Self {
        value
    }
}

impl Scalar for i32 {
    const RELATIVE_TOLERANCE: f64 = 0.0;

    fn conj(self) -> Self {
        self
    }

    fn modulus(self) -> f64 {
        f64::from(self.abs())
    }

    fn from_real(value: f64) -> Self {
        value as i32
    }
}

impl Scalar for Complex<f32> {
    const RELATIVE_TOLERANCE: f64 = 2e-5;

    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }

    fn modulus(self) -> f64 {
        f64::from(self.norm())
    }

    fn norm_sqr(self) -> f64 {
        f64::from(Complex::norm_sqr(&self))
    }

    fn from_real(value: f64) -> Self {
        Complex::new(value as f32, 0.0)
    }
}

impl Scalar for Complex<f64> {
    const RELATIVE_TOLERANCE: f64 = 1e-7;

    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }

    fn modulus(self) -> f64 {
        self.norm()
    }

    fn norm_sqr(self) -> f64 {
        Complex::norm_sqr(&self)
    }

    fn from_real(value: f64) -> Self {
        Complex::new(value, 0.0)
    }
}
