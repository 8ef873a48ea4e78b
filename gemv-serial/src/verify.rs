use gemv_core::{GemvError, MatrixViewMut, Scalar, Vector, VectorViewMut};
use num_complex::Complex;

use crate::fill::{fill_matrix, fill_vector, FillRandom};
use crate::gemv::gemv;
use crate::reference::reference_gemv;
use crate::scenario::{matrix_storage, scenarios, vector_storage, Scenario};

/// Reduces a vector to `sum_i v[i] * conj(v[i])`, its squared Euclidean
/// norm, accumulated in `f64`.
///
/// Comparing this single aggregate instead of individual elements amplifies
/// systematic errors (a wrong stride, a wrong conjugation rule) while
/// staying insensitive to per-element rounding. The `f64` accumulator keeps
/// the reduction exact for the integer domain, whose elementwise results
/// are well inside the exactly representable range.
pub fn squared_norm<V: Vector>(v: &V) -> f64 {
    let mut acc = 0.0;
    for i in 0..v.len() {
        acc += v.get(i).norm_sqr();
    }
    acc
}

/// Parameters for a verification sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Seed for the operand filler. Every scenario starts from this seed,
    /// so runs are reproducible.
    pub seed: u64,
    /// Real value of the `alpha` coefficient.
    pub alpha: f64,
    /// Real value of the `beta` coefficient.
    pub beta: f64,
    /// Magnitude bound for generated operand entries.
    pub fill_bound: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            seed: 13718,
            alpha: 3.0,
            beta: 5.0,
            fill_bound: 10.0,
        }
    }
}

impl SweepConfig {
    /// Creates a sweep configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sweep configuration with specified parameters.
    pub fn with_params(seed: u64, alpha: f64, beta: f64, fill_bound: f64) -> Self {
        Self {
            seed,
            alpha,
            beta,
            fill_bound,
        }
    }
}

fn check_aggregate<T: Scalar>(
    scenario: &Scenario,
    variant: &str,
    actual: f64,
    expected: f64,
) -> Result<(), GemvError> {
    let tolerance = T::RELATIVE_TOLERANCE;
    let diff = (actual - expected).abs();
    if diff <= tolerance * expected.abs() {
        return Ok(());
    }
    let relative_error = if expected != 0.0 {
        diff / expected.abs()
    } else {
        diff
    };
    Err(GemvError::ToleranceViolation {
        scenario: format!(
            "{} [{}] over {}",
            scenario.label(),
            variant,
            std::any::type_name::<T>()
        ),
        relative_error,
        tolerance,
    })
}

/// Runs one scenario: fills operands from the seeded generator, derives the
/// expected result independently, then certifies three kernel invocations
/// that differ only in whether `A` and `x` are passed through read-only or
/// mutable views. `y` is restored to its pre-call snapshot between
/// invocations, since the kernel mutates it in place.
pub fn run_scenario<T: Scalar + FillRandom>(
    config: &SweepConfig,
    scenario: &Scenario,
) -> Result<(), GemvError> {
    let mut rng = fastrand::Rng::with_seed(config.seed);

    let (a_rows, a_cols) = scenario.a_dims();
    let (mut a_store, a_rs, a_cs) = matrix_storage::<T>(scenario.layout_a, a_rows, a_cols);
    let (mut x_store, x_stride) = vector_storage::<T>(scenario.layout_x, scenario.cols);
    let (mut y_store, y_stride) = vector_storage::<T>(scenario.layout_y, scenario.rows);

    let mut x_view = VectorViewMut::new(&mut x_store, scenario.cols, x_stride)?;
    let mut y_view = VectorViewMut::new(&mut y_store, scenario.rows, y_stride)?;
    let mut a_view = MatrixViewMut::new(&mut a_store, a_rows, a_cols, a_rs, a_cs)?;

    fill_vector(&mut rng, config.fill_bound, &mut x_view);
    fill_vector(&mut rng, config.fill_bound, &mut y_view);
    fill_matrix(&mut rng, config.fill_bound, &mut a_view);

    let y_snapshot = y_view.as_view().to_vec();

    let alpha = T::from_real(config.alpha);
    let beta = T::from_real(config.beta);

    let expected = reference_gemv(scenario.mode, alpha, &a_view, &x_view, beta, &y_snapshot);
    let expected_aggregate = squared_norm(&expected);

    let mode = scenario.mode.as_char();

    // Fully mutable operands.
    gemv(mode, alpha, &a_view, &x_view, beta, &mut y_view)?;
    check_aggregate::<T>(
        scenario,
        "mutable A, mutable x",
        squared_norm(&y_view),
        expected_aggregate,
    )?;

    y_view.clone_from_slice(&y_snapshot)?;

    // Read-only x aliasing the same storage.
    let x_read = x_view.as_view();
    gemv(mode, alpha, &a_view, &x_read, beta, &mut y_view)?;
    check_aggregate::<T>(
        scenario,
        "mutable A, read-only x",
        squared_norm(&y_view),
        expected_aggregate,
    )?;

    y_view.clone_from_slice(&y_snapshot)?;

    // Read-only A and x.
    let a_read = a_view.as_view();
    gemv(mode, alpha, &a_read, &x_read, beta, &mut y_view)?;
    check_aggregate::<T>(
        scenario,
        "read-only A, read-only x",
        squared_norm(&y_view),
        expected_aggregate,
    )?;

    log::debug!("{} passed", scenario.label());
    Ok(())
}

/// Runs the whole scenario matrix for one scalar domain. Returns the number
/// of scenarios on success; the first violation aborts the sweep.
pub fn run_sweep<T: Scalar + FillRandom>(config: &SweepConfig) -> Result<usize, GemvError> {
    let cases = scenarios();
    log::info!(
        "Running {} gemv scenarios over {}",
        cases.len(),
        std::any::type_name::<T>()
    );
    for scenario in &cases {
        run_scenario::<T>(config, scenario)?;
    }
    Ok(cases.len())
}

/// Runs the scenario matrix for every supported scalar domain.
pub fn run_all_domains(config: &SweepConfig) -> Result<usize, GemvError> {
    let mut total = 0;
    total += run_sweep::<f32>(config)?;
    total += run_sweep::<f64>(config)?;
    total += run_sweep::<Complex<f32>>(config)?;
    total += run_sweep::<Complex<f64>>(config)?;
    total += run_sweep::<i32>(config)?;
    log::info!("All {} scenario runs passed", total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_norm_of_complex_vector() {
        let v = vec![Complex::new(3.0f64, 4.0), Complex::new(0.0, 1.0)];
        assert_eq!(squared_norm(&v), 26.0);
    }

    #[test]
    fn squared_norm_of_empty_vector_is_zero() {
        let v: Vec<f32> = vec![];
        assert_eq!(squared_norm(&v), 0.0);
    }

    #[test]
    fn aggregates_outside_tolerance_are_rejected() {
        let scenario = Scenario {
            rows: 2,
            cols: 2,
            mode: gemv_core::TransposeMode::NoTranspose,
            layout_a: gemv_core::Layout::RowMajor,
            layout_x: gemv_core::Layout::RowMajor,
            layout_y: gemv_core::Layout::RowMajor,
        };
        // Exact match passes even with zero tolerance.
        assert!(check_aggregate::<i32>(&scenario, "unit", 25.0, 25.0).is_ok());
        // Integer aggregates must match exactly.
        let err = check_aggregate::<i32>(&scenario, "unit", 25.0, 26.0).unwrap_err();
        assert!(matches!(err, GemvError::ToleranceViolation { .. }));
        // Float aggregates tolerate small relative error.
        assert!(check_aggregate::<f32>(&scenario, "unit", 1.0 + 1e-6, 1.0).is_ok());
        assert!(check_aggregate::<f32>(&scenario, "unit", 1.1, 1.0).is_err());
    }

    #[test]
    fn single_scenario_round_trip() {
        let scenario = Scenario {
            rows: 7,
            cols: 5,
            mode: gemv_core::TransposeMode::Transpose,
            layout_a: gemv_core::Layout::Strided,
            layout_x: gemv_core::Layout::RowMajor,
            layout_y: gemv_core::Layout::Strided,
        };
        run_scenario::<f64>(&SweepConfig::default(), &scenario).unwrap();
    }
}
