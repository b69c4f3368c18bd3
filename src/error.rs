use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for the reporting library
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO errors (file and directory operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed results or config JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The drawing backend failed to render or encode a figure
    #[error("Plotting error: {0}")]
    Plot(String),

    /// A sequence that must hold at least one value was empty
    #[error("Empty series: {0}")]
    EmptySeries(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// An environment entry lacks one of the compared algorithms
    #[error("Environment '{environment}' has no results for '{algorithm}'")]
    MissingAlgorithm {
        environment: String,
        algorithm: String,
    },

    /// Relative change against a zero baseline
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ReportError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ReportError::Plot(err.to_string())
    }
}

// Helper functions for common error patterns
impl ReportError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        ReportError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_algorithm<S: Into<String>>(environment: S, algorithm: S) -> Self {
        ReportError::MissingAlgorithm {
            environment: environment.into(),
            algorithm: algorithm.into(),
        }
    }
}
