//! Seed scrambling
//!
//! The central transformation: walks the seed position by position and
//! either keeps the original character or replaces it with a random one
//! from the enabled pool. The random source is injected so the algorithm
//! can be driven by a seeded generator in tests.

use rand::Rng;

use super::charset::alphabet_for;
use super::options::{GenerationOptions, LengthPolicy};

/// Scramble a seed string with an injected random source.
///
/// Each seed character that belongs to the enabled pool survives with
/// probability 0.5; every other position gets a uniformly random pool
/// character. Under [`LengthPolicy::SeedLength`] the output length always
/// equals the seed length. Under [`LengthPolicy::PadToTarget`] the output
/// is extended to `options.length` with random characters when the seed
/// is shorter.
///
/// Returns an empty string when no character class is enabled.
///
/// # Example
/// ```
/// use pwdcore::{scramble_with, GenerationOptions, LengthPolicy};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let options = GenerationOptions::default();
/// let out = scramble_with("password", &options, LengthPolicy::SeedLength, &mut rng);
/// assert_eq!(out.chars().count(), 8);
/// ```
pub fn scramble_with<R: Rng + ?Sized>(
    seed: &str,
    options: &GenerationOptions,
    policy: LengthPolicy,
    rng: &mut R,
) -> String {
    let alphabet = alphabet_for(options);
    if alphabet.is_empty() {
        return String::new();
    }

    let pool: Vec<char> = alphabet.chars().collect();
    let seed_chars: Vec<char> = seed.chars().collect();

    let output_len = match policy {
        LengthPolicy::SeedLength => seed_chars.len(),
        LengthPolicy::PadToTarget => options.length.max(seed_chars.len()),
    };

    let mut result = String::with_capacity(output_len);

    for i in 0..output_len {
        if i < seed_chars.len() {
            let original = seed_chars[i];
            // Keep the original character half the time, but only when
            // its class is currently enabled
            if alphabet.contains(original) && rng.random_bool(0.5) {
                result.push(original);
                continue;
            }
        }
        result.push(pool[rng.random_range(0..pool.len())]);
    }

    result
}

/// Scramble with the thread RNG under the production length policy
pub fn scramble(seed: &str, options: &GenerationOptions) -> String {
    scramble_with(seed, options, LengthPolicy::SeedLength, &mut rand::rng())
}

/// Generate a fully random password of `options.length` from the enabled
/// pool, with an injected random source.
///
/// Returns an empty string when no character class is enabled.
pub fn generate_with<R: Rng + ?Sized>(options: &GenerationOptions, rng: &mut R) -> String {
    let alphabet = alphabet_for(options);
    if alphabet.is_empty() {
        return String::new();
    }

    let pool: Vec<char> = alphabet.chars().collect();
    let mut result = String::with_capacity(options.length);

    for _ in 0..options.length {
        result.push(pool[rng.random_range(0..pool.len())]);
    }

    result
}

/// Generate a fully random password with the thread RNG
pub fn generate(options: &GenerationOptions) -> String {
    generate_with(options, &mut rand::rng())
}
