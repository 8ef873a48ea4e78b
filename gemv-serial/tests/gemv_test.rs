use gemv_serial::{gemv, GemvError, MatrixView, MatrixViewMut, Vector, VectorView, VectorViewMut};
use num_complex::Complex;

// Helper for float comparison in tests
fn assert_approx_eq_vec(a: &[f64], b: &[f64], tolerance: f64) {
    assert_eq!(a.len(), b.len(), "Vector lengths differ");
    for i in 0..a.len() {
        let diff = (a[i] - b[i]).abs();
        assert!(
            diff <= tolerance,
            "Verification failed at index {}: expected {}, got {}, diff {}",
            i,
            b[i],
            a[i],
            diff
        );
    }
}

#[test]
fn test_gemv_no_transpose_2x2() -> Result<(), GemvError> {
    let a_data = [1.0f64, 2.0, 3.0, 4.0];
    let a = MatrixView::row_major(&a_data, 2, 2)?;
    let x = vec![1.0f64, 1.0];
    let mut y = vec![0.0f64, 0.0];

    gemv('N', 1.0, &a, &x, 0.0, &mut y)?;

    assert_approx_eq_vec(&y, &[3.0, 7.0], 1e-12);
    Ok(())
}

#[test]
fn test_gemv_transpose_2x2() -> Result<(), GemvError> {
    let a_data = [1.0f64, 2.0, 3.0, 4.0];
    let a = MatrixView::row_major(&a_data, 2, 2)?;
    let x = vec![1.0f64, 1.0];
    let mut y = vec![0.0f64, 0.0];

    gemv('T', 1.0, &a, &x, 0.0, &mut y)?;

    assert_approx_eq_vec(&y, &[4.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_gemv_conjugate_transpose_1x1_complex() -> Result<(), GemvError> {
    let a_data = [Complex::new(1.0f64, 2.0)];
    let a = MatrixView::row_major(&a_data, 1, 1)?;
    let x = vec![Complex::new(1.0f64, 0.0)];
    let mut y = vec![Complex::new(0.0f64, 0.0)];

    let one = Complex::new(1.0f64, 0.0);
    let zero = Complex::new(0.0f64, 0.0);
    gemv('C', one, &a, &x, zero, &mut y)?;

    assert_eq!(y, vec![Complex::new(1.0, -2.0)]);
    Ok(())
}

#[test]
fn test_gemv_alpha_beta_update() -> Result<(), GemvError> {
    let a_data = [1.0f64, 2.0, 3.0, 4.0];
    let a = MatrixView::row_major(&a_data, 2, 2)?;
    let x = vec![1.0f64, 1.0];
    let mut y = vec![10.0f64, 20.0];

    gemv('N', 2.0, &a, &x, 3.0, &mut y)?;

    // y[i] = 3 * y[i] + 2 * (A * x)[i]
    assert_approx_eq_vec(&y, &[36.0, 74.0], 1e-12);
    Ok(())
}

#[test]
fn test_gemv_integer_is_exact() -> Result<(), GemvError> {
    let a_data = [1i32, 2, 3, 4, 5, 6];
    let a = MatrixView::row_major(&a_data, 2, 3)?;
    let x = vec![1i32, -1, 2];
    let mut y = vec![7i32, -7];

    gemv('N', 3, &a, &x, 5, &mut y)?;

    // A*x = [5, 11]; y = 5*y + 3*(A*x)
    assert_eq!(y, vec![50, -2]);
    Ok(())
}

#[test]
fn test_gemv_zero_rows_is_noop() -> Result<(), GemvError> {
    let a_data: [f64; 0] = [];
    let a = MatrixView::row_major(&a_data, 0, 3)?;
    let x = vec![1.0f64, 2.0, 3.0];
    let mut y: Vec<f64> = vec![];

    gemv('N', 1.0, &a, &x, 0.0, &mut y)?;

    assert!(y.is_empty());
    Ok(())
}

#[test]
fn test_gemv_zero_cols_scales_output_exactly() -> Result<(), GemvError> {
    let a_data: [f64; 0] = [];
    let a = MatrixView::row_major(&a_data, 3, 0)?;
    let x: Vec<f64> = vec![];
    let mut y = vec![1.0f64, 2.0, 3.0];

    gemv('N', 3.0, &a, &x, 5.0, &mut y)?;

    // The contraction contributes the additive identity; y := beta * y.
    assert_eq!(y, vec![5.0, 10.0, 15.0]);
    Ok(())
}

#[test]
fn test_gemv_invalid_mode_leaves_y_untouched() {
    let a_data = [1.0f64, 2.0, 3.0, 4.0];
    let a = MatrixView::row_major(&a_data, 2, 2).unwrap();
    let x = vec![1.0f64, 1.0];
    let mut y = vec![1.0f64, 2.0];

    let err = gemv('X', 1.0, &a, &x, 0.0, &mut y).unwrap_err();

    assert!(matches!(err, GemvError::InvalidMode('X')));
    assert_eq!(y, vec![1.0, 2.0]);
}

#[test]
fn test_gemv_dimension_mismatch_leaves_y_untouched() {
    let a_data = [0.0f64; 12];
    let a = MatrixView::row_major(&a_data, 3, 4).unwrap();
    // 'N' needs an input of length 4, not 3.
    let x = vec![1.0f64, 1.0, 1.0];
    let mut y = vec![1.0f64, 2.0, 3.0];

    let err = gemv('N', 1.0, &a, &x, 0.0, &mut y).unwrap_err();

    assert!(matches!(err, GemvError::InvalidDimensions(_)));
    assert_eq!(y, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_gemv_output_length_is_checked() {
    let a_data = [0.0f64; 12];
    let a = MatrixView::row_major(&a_data, 3, 4).unwrap();
    let x = vec![0.0f64; 4];
    let mut y = vec![0.0f64; 4];

    assert!(gemv('N', 1.0, &a, &x, 0.0, &mut y).is_err());
}

#[test]
fn test_gemv_layouts_produce_identical_results() -> Result<(), GemvError> {
    // [[1, 2, 3], [4, 5, 6]] in three physical placements.
    let rm = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let cm = [1.0f64, 4.0, 2.0, 5.0, 3.0, 6.0];
    let padded = [1.0f64, 0.0, 2.0, 0.0, 3.0, 0.0, 4.0, 0.0, 5.0, 0.0, 6.0, 0.0];

    let x = vec![1.0f64, -1.0, 2.0];
    let mut results = Vec::new();

    for a in [
        MatrixView::row_major(&rm, 2, 3)?,
        MatrixView::col_major(&cm, 2, 3)?,
        MatrixView::new(&padded, 2, 3, 6, 2)?,
    ] {
        let mut y = vec![0.5f64, -0.5];
        gemv('N', 3.0, &a, &x, 5.0, &mut y)?;
        results.push(y);
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], results[2]);
    Ok(())
}

#[test]
fn test_gemv_column_subview_of_wider_block() -> Result<(), GemvError> {
    // x lives as column 0 of a 3x2 row-major block; the view must stride
    // past the second column.
    let block_data = [1.0f64, -9.0, 2.0, -9.0, 3.0, -9.0];
    let block = MatrixView::row_major(&block_data, 3, 2)?;
    let x = block.column(0)?;

    let a_data = [1.0f64, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0];
    let a = MatrixView::row_major(&a_data, 3, 3)?;
    let mut y = vec![0.0f64; 3];

    gemv('N', 1.0, &a, &x, 0.0, &mut y)?;

    assert_approx_eq_vec(&y, &[4.0, 2.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_gemv_const_views_match_mutable_views() -> Result<(), GemvError> {
    let mut a_data = [1.0f64, 2.0, 3.0, 4.0];
    let mut x_data = [2.0f64, -1.0];

    let y_init = [1.0f64, -1.0];

    // Mutable views of A and x.
    let mut y_mut = y_init.to_vec();
    {
        let a = MatrixViewMut::row_major(&mut a_data, 2, 2)?;
        let x = VectorViewMut::contiguous(&mut x_data);
        gemv('T', 2.0, &a, &x, 3.0, &mut y_mut)?;
    }

    // Read-only aliases of the same storage.
    let mut y_const = y_init.to_vec();
    {
        let a = MatrixView::row_major(&a_data, 2, 2)?;
        let x = VectorView::contiguous(&x_data);
        gemv('T', 2.0, &a, &x, 3.0, &mut y_const)?;
    }

    assert_eq!(y_mut, y_const);
    Ok(())
}

#[test]
fn test_mutable_views_reset_between_calls() -> Result<(), GemvError> {
    // Two identical calls on a restored output give identical results.
    let a_data = [1.0f64, 2.0, 3.0, 4.0];
    let a = MatrixView::row_major(&a_data, 2, 2)?;
    let x = vec![1.0f64, 2.0];
    let snapshot = [0.25f64, -0.75];

    let mut y_data = snapshot;
    let mut y = VectorViewMut::contiguous(&mut y_data);
    gemv('N', 3.0, &a, &x, 5.0, &mut y)?;
    let first = y.as_view().to_vec();

    y.clone_from_slice(&snapshot)?;
    gemv('N', 3.0, &a, &x, 5.0, &mut y)?;
    assert_eq!(first, y.as_view().to_vec());

    // Without the reset the update compounds on the previous result.
    gemv('N', 3.0, &a, &x, 5.0, &mut y)?;
    assert_ne!(y.get(0), first[0]);
    Ok(())
}
