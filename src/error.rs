use thiserror::Error;

/// Top-level error type for path subdivision.
#[derive(Debug, Error)]
pub enum SubdivideError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors related to the path handed in by the caller.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to allocate output for {points} points")]
    AllocationFailure { points: usize },
}

/// Errors related to refinement thresholds.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} is not finite")]
    NotFinite { parameter: &'static str },
}

/// Convenience type alias for results using [`SubdivideError`].
pub type Result<T> = std::result::Result<T, SubdivideError>;
