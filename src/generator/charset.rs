//! Character class registry
//!
//! Maps the four independently selectable character classes to their
//! fixed alphabets and builds the combined pool for generation.

use serde::{Deserialize, Serialize};

use super::options::GenerationOptions;

/// Uppercase alphabet (26 chars)
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase alphabet (26 chars)
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit alphabet (10 chars)
pub const DIGIT_CHARS: &str = "0123456789";

/// Symbol alphabet (25 chars). Fixed literal set, not a locale class.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+{}[]:;<>,.?/|";

/// One of the four selectable character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes in the fixed concatenation order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed alphabet for this class
    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Symbol => SYMBOL_CHARS,
        }
    }

    /// Classify a character into its class, if it belongs to one
    pub fn classify(ch: char) -> Option<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(ch))
    }
}

/// Build the combined alphabet for the enabled classes.
///
/// Classes are concatenated in the fixed order uppercase, lowercase,
/// digits, symbols. Returns an empty string when no class is enabled;
/// callers treat that as "nothing selected", not as an error.
pub fn alphabet_for(options: &GenerationOptions) -> String {
    let mut alphabet = String::new();

    if options.uppercase {
        alphabet.push_str(UPPERCASE_CHARS);
    }
    if options.lowercase {
        alphabet.push_str(LOWERCASE_CHARS);
    }
    if options.digits {
        alphabet.push_str(DIGIT_CHARS);
    }
    if options.symbols {
        alphabet.push_str(SYMBOL_CHARS);
    }

    alphabet
}
