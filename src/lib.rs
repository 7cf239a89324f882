//! # pwdcore
//!
//! Core library of a seed-based password generator.
//!
//! ## Features
//!
//! - Seed scrambling: per-position retain-or-replace transformation
//!   over four selectable character classes
//! - Pure option reducer with UI mutation rules (last-class guard,
//!   slider clamping, input admission)
//! - 0-4 strength scoring with categorical labels
//! - Digest preview dispatch (SHA-256, MD5, Base64)
//!
//! ## Example
//!
//! ```
//! use pwdcore::{Session, DigestAlgorithm};
//!
//! let mut session = Session::new();
//! session.set_seed("password");
//!
//! let generated = session.generate().unwrap().to_string();
//! assert_eq!(generated.chars().count(), 8);
//!
//! session.set_algorithm(DigestAlgorithm::Md5);
//! let preview = session.digest_preview().unwrap().unwrap();
//! assert_eq!(preview.len(), 32);
//! ```
//!
//! Not a cryptographically secure generator: character selection uses a
//! non-cryptographic random source by design.

pub mod digest;
pub mod error;
pub mod generator;
pub mod session;

// Re-export main types
pub use digest::{DigestAlgorithm, Sha256Provider, SystemSha256, digest, digest_with};
pub use error::{CoreError, Result};
pub use generator::{
    CharacterClass, GenerationOptions, LengthPolicy, OptionsEvent, StrengthLabel, alphabet_for,
    evaluate, generate, generate_with, scramble, scramble_with, score, seed_input_allowed,
};
pub use session::Session;

/// Default target length
pub const DEFAULT_LENGTH: usize = 16;

/// Minimum slider length
pub const LENGTH_MIN: usize = 0;

/// Maximum slider length
pub const LENGTH_MAX: usize = 64;

/// Maximum strength score
pub const STRENGTH_MAX: u8 = 4;
