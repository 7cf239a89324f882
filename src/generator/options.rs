//! Generation options and the option state machine
//!
//! `GenerationOptions` is the immutable input to one generation call.
//! UI-driven changes go through the pure [`apply`] reducer so the
//! mutation rules can be tested without any widget harness.

use serde::{Deserialize, Serialize};

use super::charset::CharacterClass;
use crate::{DEFAULT_LENGTH, LENGTH_MAX, LENGTH_MIN};

/// Options for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include digits (0-9)
    pub digits: bool,
    /// Include symbols (!@#$...)
    pub symbols: bool,
    /// Target length for random generation and the padding policy
    pub length: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            length: DEFAULT_LENGTH,
        }
    }
}

impl GenerationOptions {
    /// True when at least one character class is enabled
    pub fn has_enabled_class(&self) -> bool {
        self.uppercase || self.lowercase || self.digits || self.symbols
    }

    /// Whether the given class is enabled
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    /// The enabled classes in the fixed concatenation order
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    fn set_enabled(&mut self, class: CharacterClass, value: bool) {
        match class {
            CharacterClass::Uppercase => self.uppercase = value,
            CharacterClass::Lowercase => self.lowercase = value,
            CharacterClass::Digit => self.digits = value,
            CharacterClass::Symbol => self.symbols = value,
        }
    }
}

/// How the scrambler determines the output length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthPolicy {
    /// Output length always equals the seed length; the configured
    /// target length is displayed but never applied. Production policy.
    #[default]
    SeedLength,
    /// Output length is `max(options.length, seed length)`; positions
    /// beyond the seed are filled with random characters. Compatibility
    /// variant, opt-in only.
    PadToTarget,
}

/// An option mutation requested by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionsEvent {
    /// Flip one character class on or off
    Toggle(CharacterClass),
    /// Move the length slider
    SetLength(usize),
}

/// Apply an event to the current options, returning the new options.
///
/// Disabling the last enabled class is rejected: the state comes back
/// unchanged so the pool can never become empty through the UI path.
/// Lengths are clamped to the slider range.
pub fn apply(options: &GenerationOptions, event: OptionsEvent) -> GenerationOptions {
    let mut next = options.clone();

    match event {
        OptionsEvent::Toggle(class) => {
            let currently_on = options.is_enabled(class);
            if currently_on && options.enabled_classes().len() == 1 {
                return next;
            }
            next.set_enabled(class, !currently_on);
        }
        OptionsEvent::SetLength(length) => {
            next.length = length.clamp(LENGTH_MIN, LENGTH_MAX);
        }
    }

    next
}

/// Check whether manually typed seed text is admissible under the
/// current options.
///
/// Each character must belong to an enabled class. The symbol option is
/// deliberately wider here than the generation alphabet: it admits any
/// character that is not an ASCII letter or digit (underscore and
/// whitespace included). With nothing enabled only the empty string
/// passes.
pub fn seed_input_allowed(options: &GenerationOptions, text: &str) -> bool {
    text.chars().all(|ch| {
        (options.lowercase && ch.is_ascii_lowercase())
            || (options.uppercase && ch.is_ascii_uppercase())
            || (options.digits && ch.is_ascii_digit())
            || (options.symbols && !ch.is_ascii_alphanumeric())
    })
}
