//! Digest preview dispatch
//!
//! Selects among the supported hash/encoding algorithms for a text
//! string and renders the result in that algorithm's canonical textual
//! form. The SHA-256 primitive is reached through a capability trait;
//! MD5 and Base64 are self-contained.

pub mod base64;
mod md5;
mod sha256;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

pub use md5::{md5_bytes, md5_hex};
pub use sha256::{Sha256Provider, SystemSha256};

/// SHA-256 hex digest length
pub const SHA256_HEX_LENGTH: usize = 64;

/// MD5 hex digest length
pub const MD5_HEX_LENGTH: usize = 32;

/// Selectable digest algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256, lowercase hex, 64 chars
    Sha256,
    /// MD5, lowercase hex, 32 chars. Broken, kept for legacy display only.
    Md5,
    /// Standard Base64 of the UTF-8 bytes; reversible
    Base64,
}

impl DigestAlgorithm {
    /// All algorithms in display order
    pub const ALL: [DigestAlgorithm; 3] = [
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Md5,
        DigestAlgorithm::Base64,
    ];

    /// Display name for this algorithm
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Base64 => "Base64",
        }
    }

    /// Parse an algorithm from its display or lowercase name
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha-256" | "sha256" => Ok(DigestAlgorithm::Sha256),
            "md5" => Ok(DigestAlgorithm::Md5),
            "base64" => Ok(DigestAlgorithm::Base64),
            _ => Err(CoreError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the digest of `text` with an explicit SHA-256 provider.
///
/// Never panics: a provider fault surfaces as [`CoreError::Digest`] so
/// the caller can display a fallback instead of crashing.
pub fn digest_with(
    text: &str,
    algorithm: DigestAlgorithm,
    provider: &dyn Sha256Provider,
) -> Result<String> {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let bytes = provider
                .compute(text.as_bytes())
                .map_err(CoreError::Digest)?;
            Ok(to_hex(&bytes))
        }
        DigestAlgorithm::Md5 => Ok(md5_hex(text)),
        DigestAlgorithm::Base64 => Ok(base64::encode(text)),
    }
}

/// Compute the digest of `text` with the default system provider
pub fn digest(text: &str, algorithm: DigestAlgorithm) -> Result<String> {
    digest_with(text, algorithm, &SystemSha256)
}

/// Render bytes as lowercase hex
fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that always fails, for exercising the fault path
    struct FailingSha256;

    impl Sha256Provider for FailingSha256 {
        fn compute(&self, _data: &[u8]) -> std::result::Result<[u8; 32], String> {
            Err("primitive unavailable".to_string())
        }
    }

    #[test]
    fn test_digest_empty_inputs() {
        assert_eq!(digest("", DigestAlgorithm::Base64).unwrap(), "");
        assert_eq!(
            digest("", DigestAlgorithm::Md5).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            digest("", DigestAlgorithm::Sha256).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_lengths() {
        let text = "password";
        assert_eq!(
            digest(text, DigestAlgorithm::Sha256).unwrap().len(),
            SHA256_HEX_LENGTH
        );
        assert_eq!(
            digest(text, DigestAlgorithm::Md5).unwrap().len(),
            MD5_HEX_LENGTH
        );
    }

    #[test]
    fn test_digest_sha256_known_value() {
        assert_eq!(
            digest("password", DigestAlgorithm::Sha256).unwrap(),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_digest_md5_known_value() {
        assert_eq!(
            digest("password", DigestAlgorithm::Md5).unwrap(),
            "5f4dcc3b5aa765d61d8327deb882cf99"
        );
    }

    #[test]
    fn test_digest_base64_roundtrip() {
        let encoded = digest("secret text", DigestAlgorithm::Base64).unwrap();
        assert_eq!(base64::decode(&encoded).unwrap(), b"secret text");
    }

    #[test]
    fn test_failing_provider_reports_error() {
        let result = digest_with("password", DigestAlgorithm::Sha256, &FailingSha256);
        match result {
            Err(CoreError::Digest(msg)) => assert!(msg.contains("unavailable")),
            other => panic!("Expected Digest error, got {:?}", other),
        }
    }

    #[test]
    fn test_failing_provider_only_affects_sha256() {
        // MD5 and Base64 are self-contained and ignore the provider
        assert!(digest_with("x", DigestAlgorithm::Md5, &FailingSha256).is_ok());
        assert!(digest_with("x", DigestAlgorithm::Base64, &FailingSha256).is_ok());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            DigestAlgorithm::parse("SHA-256").unwrap(),
            DigestAlgorithm::Sha256
        );
        assert_eq!(DigestAlgorithm::parse("md5").unwrap(), DigestAlgorithm::Md5);
        assert_eq!(
            DigestAlgorithm::parse("Base64").unwrap(),
            DigestAlgorithm::Base64
        );
        assert!(DigestAlgorithm::parse("sha512").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DigestAlgorithm::Sha256.to_string(), "SHA-256");
        assert_eq!(DigestAlgorithm::Md5.name(), "MD5");
    }

    #[test]
    fn test_parse_roundtrips_display_names() {
        for algorithm in DigestAlgorithm::ALL {
            assert_eq!(DigestAlgorithm::parse(algorithm.name()).unwrap(), algorithm);
        }
    }
}
