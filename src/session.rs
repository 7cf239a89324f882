//! Generator session
//!
//! This module provides the primary interface the input/display layer
//! drives: it owns the option state, the current seed, the generated
//! password with its score, and the selected digest algorithm. All
//! mutation rules live here or in the pure reducer, so the surrounding
//! UI stays plain I/O plumbing.

use crate::digest::{self, DigestAlgorithm};
use crate::error::Result;
use crate::generator::options::{self, GenerationOptions, LengthPolicy, OptionsEvent};
use crate::generator::scramble::scramble_with;
use crate::generator::strength::{self, StrengthLabel};

/// Stateful generation session
#[derive(Debug, Clone)]
pub struct Session {
    /// Current generation options
    options: GenerationOptions,
    /// Output length policy
    policy: LengthPolicy,
    /// Manually entered seed text
    seed: String,
    /// Last generated password, if any
    password: Option<String>,
    /// Score of the last generated password
    strength: u8,
    /// Selected digest preview algorithm
    algorithm: DigestAlgorithm,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with default options under the production
    /// length policy
    pub fn new() -> Self {
        Self {
            options: GenerationOptions::default(),
            policy: LengthPolicy::SeedLength,
            seed: String::new(),
            password: None,
            strength: 0,
            algorithm: DigestAlgorithm::Sha256,
        }
    }

    /// Create a session with an explicit length policy
    pub fn with_policy(policy: LengthPolicy) -> Self {
        Self {
            policy,
            ..Self::new()
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn strength(&self) -> (u8, StrengthLabel) {
        (self.strength, StrengthLabel::from_score(self.strength))
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: DigestAlgorithm) {
        self.algorithm = algorithm;
    }

    /// Route an option event through the reducer
    pub fn handle(&mut self, event: OptionsEvent) {
        self.options = options::apply(&self.options, event);
    }

    /// Replace the seed with manually typed text.
    ///
    /// Deletions (input no longer than the current seed) are always
    /// admitted; grown input must pass the class filter. Admitted input
    /// also moves the displayed target length to the seed length.
    /// Returns whether the input was taken.
    pub fn set_seed(&mut self, text: &str) -> bool {
        let shrinking = text.chars().count() <= self.seed.chars().count();
        if !shrinking && !options::seed_input_allowed(&self.options, text) {
            return false;
        }

        self.seed = text.to_string();
        self.options = options::apply(
            &self.options,
            OptionsEvent::SetLength(self.seed.chars().count()),
        );
        true
    }

    /// Scramble the current seed into a new password.
    ///
    /// Refuses an empty seed (returns `None` without touching state).
    /// On success the password and its score are stored and the
    /// password is returned.
    pub fn generate(&mut self) -> Option<&str> {
        if self.seed.is_empty() {
            return None;
        }

        let password = scramble_with(&self.seed, &self.options, self.policy, &mut rand::rng());
        self.strength = strength::score(&password);
        self.password = Some(password);
        self.password.as_deref()
    }

    /// Digest of the current seed under the selected algorithm.
    ///
    /// `None` for an empty seed (the preview shows a placeholder then).
    pub fn digest_preview(&self) -> Result<Option<String>> {
        if self.seed.is_empty() {
            return Ok(None);
        }
        digest::digest(&self.seed, self.algorithm).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::CharacterClass;

    #[test]
    fn test_new_session_state() {
        let session = Session::new();
        assert_eq!(session.seed(), "");
        assert_eq!(session.password(), None);
        assert_eq!(session.strength(), (0, StrengthLabel::Weak));
        assert_eq!(session.algorithm(), DigestAlgorithm::Sha256);
    }

    #[test]
    fn test_set_seed_tracks_length() {
        let mut session = Session::new();
        assert!(session.set_seed("Abc123"));
        assert_eq!(session.seed(), "Abc123");
        assert_eq!(session.options().length, 6);
    }

    #[test]
    fn test_set_seed_rejects_filtered_input() {
        let mut session = Session::new();
        session.handle(OptionsEvent::Toggle(CharacterClass::Digit));
        assert!(!session.options().digits);

        assert!(!session.set_seed("abc1"));
        assert_eq!(session.seed(), "");

        assert!(session.set_seed("abcd"));
        assert_eq!(session.seed(), "abcd");
    }

    #[test]
    fn test_set_seed_allows_deletion() {
        let mut session = Session::new();
        assert!(session.set_seed("abc123"));
        // Disable digits, then shrink: deletions bypass the filter
        session.handle(OptionsEvent::Toggle(CharacterClass::Digit));
        assert!(session.set_seed("abc12"));
        assert_eq!(session.seed(), "abc12");
    }

    #[test]
    fn test_generate_empty_seed_refused() {
        let mut session = Session::new();
        assert_eq!(session.generate(), None);
        assert_eq!(session.password(), None);
    }

    #[test]
    fn test_generate_stores_password_and_score() {
        let mut session = Session::new();
        session.set_seed("correcthorse1!");
        let generated = session.generate().unwrap().to_string();
        assert_eq!(generated.chars().count(), 14);
        assert_eq!(session.password(), Some(generated.as_str()));

        let (score, label) = session.strength();
        assert_eq!(score, strength::score(&generated));
        assert_eq!(label, StrengthLabel::from_score(score));
    }

    #[test]
    fn test_generate_under_padding_policy() {
        let mut session = Session::with_policy(LengthPolicy::PadToTarget);
        session.set_seed("seed");
        session.handle(OptionsEvent::SetLength(20));
        let generated = session.generate().unwrap();
        assert_eq!(generated.chars().count(), 20);
    }

    #[test]
    fn test_digest_preview() {
        let mut session = Session::new();
        assert_eq!(session.digest_preview().unwrap(), None);

        session.set_seed("password");
        session.set_algorithm(DigestAlgorithm::Md5);
        assert_eq!(
            session.digest_preview().unwrap().as_deref(),
            Some("5f4dcc3b5aa765d61d8327deb882cf99")
        );

        session.set_algorithm(DigestAlgorithm::Base64);
        assert_eq!(
            session.digest_preview().unwrap().as_deref(),
            Some("cGFzc3dvcmQ=")
        );
    }

    #[test]
    fn test_last_class_guard_via_session() {
        let mut session = Session::new();
        session.handle(OptionsEvent::Toggle(CharacterClass::Uppercase));
        session.handle(OptionsEvent::Toggle(CharacterClass::Digit));
        session.handle(OptionsEvent::Toggle(CharacterClass::Symbol));
        // Lowercase is the last one standing; the toggle must bounce
        session.handle(OptionsEvent::Toggle(CharacterClass::Lowercase));
        assert!(session.options().lowercase);
    }
}
