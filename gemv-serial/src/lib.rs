//! `gemv-serial`: a serial dense matrix-vector product with a built-in
//! correctness harness.
//!
//! The kernel computes `y := alpha * op(A) * x + beta * y` over strided
//! views of any layout and over real, complex, and integer scalar domains.
//! The harness re-derives every result through an independent reference
//! path and certifies the two via a squared-norm aggregate comparison.

// Core modules
pub mod fill;
pub mod gemv;
pub mod reference;
pub mod scenario;
pub mod verify;

pub use fill::FillRandom;
pub use gemv::gemv;
pub use reference::reference_gemv;
pub use scenario::{scenarios, Scenario};
pub use verify::{run_all_domains, run_scenario, run_sweep, squared_norm, SweepConfig};

// Re-export from gemv_core
pub use gemv_core::{
    GemvError,
    Layout,
    Matrix,
    MatrixMut,
    MatrixView,
    MatrixViewMut,
    Scalar,
    TransposeMode,
    Vector,
    VectorMut,
    VectorView,
    VectorViewMut,
};
