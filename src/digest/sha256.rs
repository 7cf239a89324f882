//! SHA-256 digest capability
//!
//! The dispatcher does not call a hash crate directly; it goes through
//! the [`Sha256Provider`] trait so the primitive can be swapped (or
//! faulted) in tests. The default provider is backed by the `sha2` crate.

use sha2::{Digest, Sha256};

/// Abstract SHA-256 primitive.
///
/// A failing provider reports an error string; the dispatcher converts
/// it into a digest error instead of propagating a panic.
pub trait Sha256Provider {
    /// Compute the 32-byte SHA-256 digest of the input
    fn compute(&self, data: &[u8]) -> Result<[u8; 32], String>;
}

/// Default provider backed by the `sha2` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSha256;

impl Sha256Provider for SystemSha256 {
    fn compute(&self, data: &[u8]) -> Result<[u8; 32], String> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Ok(hasher.finalize().into())
    }
}
