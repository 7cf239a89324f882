//! Error types for pwdcore

use thiserror::Error;

/// Main error type for core operations
///
/// The generation and scoring paths are total and never produce errors;
/// only the digest path can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Digest computation failed in the underlying primitive
    #[error("Digest error: {0}")]
    Digest(String),

    /// Decoding an encoded digest back to bytes failed
    #[error("Decode error: {0}")]
    Decode(String),

    /// Unknown digest algorithm name
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl From<base64::DecodeError> for CoreError {
    fn from(err: base64::DecodeError) -> Self {
        CoreError::Decode(err.to_string())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::Digest("provider failed".to_string());
        assert!(err.to_string().contains("provider failed"));

        let err = CoreError::UnknownAlgorithm("sha512".to_string());
        assert!(err.to_string().contains("sha512"));
    }

    #[test]
    fn test_error_from_base64() {
        let decode_err = base64::DecodeError::InvalidPadding;
        let core_err: CoreError = decode_err.into();
        match core_err {
            CoreError::Decode(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Decode"),
        }
    }
}
