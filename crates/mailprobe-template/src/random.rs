//! Random filler strings for template placeholders.
//!
//! Values produced here are illustrative content for test messages only. They
//! come from the thread-local RNG and carry no security property.

use crate::error::{Result, TemplateError};
use rand::seq::SliceRandom;

/// Longest random value a placeholder may request.
pub const MAX_RANDOM_LENGTH: usize = 4096;

const DIGITS: &[u8] = b"0123456789";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Character class selected by a placeholder mode tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `A`: letters and digits
    Alphanumeric,
    /// `C`: letters only
    Letters,
    /// `L`: lowercase letters and digits
    LowerAlphanumeric,
    /// `LU`: uppercase letters and digits
    UpperAlphanumeric,
    /// `N`: digits only
    Digits,
    /// `CL`: lowercase letters only
    Lower,
    /// `CLU`: uppercase letters only
    Upper,
    /// `CS`: punctuation and symbols
    Symbols,
}

impl CharClass {
    /// Resolve a mode tag. Unknown tags fall back to [`CharClass::Alphanumeric`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "C" => Self::Letters,
            "L" => Self::LowerAlphanumeric,
            "LU" => Self::UpperAlphanumeric,
            "N" => Self::Digits,
            "CL" => Self::Lower,
            "CLU" => Self::Upper,
            "CS" => Self::Symbols,
            _ => Self::Alphanumeric,
        }
    }

    /// The alphabet characters are drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Letters => LETTERS,
            Self::LowerAlphanumeric => LOWER_ALPHANUMERIC,
            Self::UpperAlphanumeric => UPPER_ALPHANUMERIC,
            Self::Digits => DIGITS,
            Self::Lower => LOWER,
            Self::Upper => UPPER,
            Self::Symbols => SYMBOLS,
        }
    }
}

/// Generate `length` characters drawn uniformly, with replacement, from `class`.
#[must_use]
pub fn generate(class: CharClass, length: usize) -> String {
    let alphabet = class.alphabet();
    let mut rng = rand::thread_rng();
    (0..length)
        .filter_map(|_| alphabet.choose(&mut rng).copied().map(char::from))
        .collect()
}

/// Generate from a raw mode tag and a base-10 length numeral.
///
/// # Errors
/// Returns [`TemplateError::InvalidLength`] if `length` is not a non-negative
/// integer that fits in `usize`, and [`TemplateError::LengthTooLarge`] if it
/// exceeds [`MAX_RANDOM_LENGTH`].
pub fn generate_from_tag(mode: &str, length: &str) -> Result<String> {
    let length: usize = length
        .parse()
        .map_err(|_| TemplateError::InvalidLength(length.to_string()))?;
    if length > MAX_RANDOM_LENGTH {
        return Err(TemplateError::LengthTooLarge {
            length,
            max: MAX_RANDOM_LENGTH,
        });
    }
    Ok(generate(CharClass::from_tag(mode), length))
}
