//! Caesar cipher transform.
//!
//! ## Key Properties
//!
//! - **Total**: never fails, any string input is valid
//! - **Pure**: no state, no side effects
//! - **Case-preserving**: `a` shifts to another lowercase letter
//! - **Pass-through**: digits, punctuation, and whitespace are untouched
//!
//! ```
//! use caesar_core::cipher;
//!
//! assert_eq!(cipher::encode("HELLO WORLD", 5), "MJQQT BTWQI");
//! assert_eq!(cipher::decode("MJQQT BTWQI", 5), "HELLO WORLD");
//! ```

/// Size of the cipher alphabet.
pub const ALPHABET_LEN: i32 = 26;

/// Normalize an arbitrary shift into `[0, 25]`.
///
/// Negative shifts wrap: `normalize_shift(-1) == 25`.
#[must_use]
pub fn normalize_shift(shift: i32) -> i32 {
    shift.rem_euclid(ALPHABET_LEN)
}

/// Encode `text` by shifting each ASCII letter `shift` positions forward,
/// wrapping within its 26-letter alphabet.
///
/// A shift of 0 (or any multiple of 26) is the identity transform.
/// Non-letters pass through unchanged.
#[must_use]
pub fn encode(text: &str, shift: i32) -> String {
    let shift = normalize_shift(shift) as u8;
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Decode `text` encoded with `shift`.
///
/// Defined as `encode(text, -shift)`; round-trips for any shift.
#[must_use]
pub fn decode(text: &str, shift: i32) -> String {
    encode(text, -shift)
}

fn shift_char(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    let offset = (c as u8 - base + shift) % ALPHABET_LEN as u8;
    (base + offset) as char
}
