//! Caesar cipher and ROT13
//!
//! A fixed-shift substitution cipher, the degenerate single-letter-key case
//! of the Vigenère cipher. Any shift value is accepted and reduced modulo 26,
//! so these functions never fail.

use crate::ROT13_SHIFT;

/// Shift every ASCII letter of `text` by `shift` positions.
///
/// Case is preserved and non-letter characters pass through unchanged.
/// Negative shifts and shifts beyond 26 are reduced with euclidean modulo.
///
/// # Example
///
/// ```
/// use cipherlab::caesar::encrypt;
///
/// assert_eq!(encrypt("Hello, World!", 3), "Khoor, Zruog!");
/// assert_eq!(encrypt("Hello", 29), encrypt("Hello", 3));
/// ```
pub fn encrypt(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                (base + (c as u8 - base + shift) % 26) as char
            } else {
                c
            }
        })
        .collect()
}

/// Inverse of [`encrypt`] for the same shift.
pub fn decrypt(text: &str, shift: i32) -> String {
    encrypt(text, -shift)
}

/// ROT13: a Caesar cipher with shift 13, its own inverse.
///
/// # Example
///
/// ```
/// use cipherlab::caesar::rot13;
///
/// assert_eq!(rot13("Why did the chicken cross the road?"),
///            "Jul qvq gur puvpxra pebff gur ebnq?");
/// assert_eq!(rot13(&rot13("Gb trg gb gur bgure fvqr!")),
///            "Gb trg gb gur bgure fvqr!");
/// ```
pub fn rot13(text: &str) -> String {
    encrypt(text, ROT13_SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shift() {
        assert_eq!(encrypt("ABC", 3), "DEF");
        assert_eq!(encrypt("xyz", 3), "abc");
        assert_eq!(decrypt("DEF", 3), "ABC");
    }

    #[test]
    fn test_non_letters_untouched() {
        assert_eq!(encrypt("Attack at 06:00!", 5), "Fyyfhp fy 06:00!");
    }

    #[test]
    fn test_negative_and_large_shifts() {
        assert_eq!(encrypt("Hello", -23), encrypt("Hello", 3));
        assert_eq!(encrypt("Hello", 52), "Hello");
        assert_eq!(decrypt(&encrypt("Round trip.", -100), -100), "Round trip.");
    }

    #[test]
    fn test_rot13_involution() {
        let text = "The Quick Brown Fox Jumps Over 13 Lazy Dogs.";
        assert_eq!(rot13(&rot13(text)), text);
        assert_eq!(rot13("HELLO"), "URYYB");
    }
}
