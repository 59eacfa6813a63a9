//! Error types for extraction-result processing.
//!
//! This module defines all error types that can occur while decoding and
//! comparing extraction results.

/// Result type alias for doclens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding and processing extraction results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Extraction-result payload is missing required structure
    #[error("Malformed extraction result: {0}")]
    MalformedResult(String),

    /// JSON decoding error.
    ///
    /// Also covers unrecognized bounding-box shapes: a bbox that matches
    /// neither wire schema fails deserialization at the boundary, before it
    /// can reach normalization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Per-file extraction failure reported by the backend.
    ///
    /// Captured as a value so the caller can surface it per file; failed
    /// extractions are never cached and are retried on next access.
    #[error("Extraction failed for '{file}': {reason}")]
    Extraction {
        /// Name of the file whose extraction failed
        file: String,
        /// Backend-reported reason (error payload or transport failure)
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_result_error() {
        let err = Error::MalformedResult("missing content.text_blocks".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Malformed extraction result"));
        assert!(msg.contains("text_blocks"));
    }

    #[test]
    fn test_extraction_error() {
        let err = Error::Extraction {
            file: "report.pdf".to_string(),
            reason: "status 502".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("report.pdf"));
        assert!(msg.contains("502"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
