//! Reporting errors.

use thiserror::Error;

/// Errors that can occur while rendering or emitting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A field could not be converted to JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The rendered report could not be written out.
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}
