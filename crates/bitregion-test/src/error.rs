//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test map
    #[error("failed to load region '{path}': {message}")]
    RegionLoad { path: String, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
