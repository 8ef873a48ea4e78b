use thiserror::Error;

#[derive(Error, Debug)]
pub enum GemvError {
    #[error("Invalid transpose mode letter '{0}', expected 'N', 'T' or 'C'")]
    InvalidMode(char),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error(
        "Aggregate comparison failed for {scenario}: relative error {relative_error:e} exceeds tolerance {tolerance:e}"
    )]
    ToleranceViolation {
        scenario: String,
        relative_error: f64,
        tolerance: f64,
    },
    // Add more specific errors as needed
}
