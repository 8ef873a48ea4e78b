//! # GEMV Core Library
//!
//! Data model for the serial matrix-vector product: scalar domains,
//! layout-independent strided views, transpose-mode parsing, and the shared
//! error type. Algorithm code lives in the `gemv-serial` crate.

// Declare modules
pub mod error;
pub mod layout;
pub mod matrix;
pub mod scalar;
pub mod traits;
pub mod vector;

// Re-export public types
pub use error::GemvError;
pub use layout::{Layout, TransposeMode};
pub use matrix::{MatrixView, MatrixViewMut};
pub use scalar::Scalar;
pub use traits::{Matrix, MatrixMut, Vector, VectorMut};
pub use vector::{VectorView, VectorViewMut};
