//! Vigenère cipher with cryptanalysis helpers
//!
//! A polyalphabetic substitution cipher: each letter of the text is shifted
//! by the value (0-25) of the current key letter. The key cursor advances
//! only when a letter is processed, so digits, punctuation and whitespace
//! pass through unchanged without consuming a key position.

mod analysis;

pub use analysis::{AnalysisResult, BruteForceResult, analyze, brute_force};

use rand::Rng;

use crate::error::{CipherError, Result};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Check key constraints: non-empty and alphabetic.
///
/// Returns the key normalized to uppercase shift values (0-25).
fn key_shifts(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    if !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CipherError::InvalidKey(key.to_string()));
    }
    Ok(key
        .bytes()
        .map(|b| b.to_ascii_uppercase() - b'A')
        .collect())
}

/// Apply the repeating-key shift to `text`.
///
/// `sign` is +1 for encryption, -1 for decryption. The key cursor is a local
/// counter advanced only on ASCII letters.
fn transform(text: &str, key: &str, sign: i8) -> Result<String> {
    let shifts = key_shifts(key)?;
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
            let value = (c as u8) - base;
            let shift = shifts[cursor % shifts.len()];
            let shifted = match sign {
                1 => (value + shift) % 26,
                _ => (value + 26 - shift) % 26,
            };
            out.push((base + shifted) as char);
            cursor += 1;
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Encrypt `text` with the Vigenère cipher.
///
/// The key is case-insensitive; the case of each text letter is preserved.
/// Non-letter characters are copied unchanged and do not advance the key.
///
/// # Example
///
/// ```
/// use cipherlab::vigenere::encrypt;
///
/// assert_eq!(encrypt("HELLOWORLD", "KEY").unwrap(), "RIJVSUYVJN");
/// assert_eq!(encrypt("ATTACK", "LIME").unwrap(), "LBFENS");
/// ```
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, 1)
}

/// Decrypt `text` with the Vigenère cipher.
///
/// Exact mirror of [`encrypt`]: `decrypt(encrypt(p, k), k) == p` for every
/// valid key.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, -1)
}

/// Check whether `ciphertext` is the encryption of `plaintext` under `key`.
///
/// The comparison is case-insensitive.
pub fn verify(plaintext: &str, ciphertext: &str, key: &str) -> Result<bool> {
    let encrypted = encrypt(plaintext, key)?;
    Ok(encrypted.eq_ignore_ascii_case(ciphertext))
}

/// Generate a random uppercase key of the given length.
///
/// Uses the process PRNG; cryptographic strength is not required for a
/// classical cipher key.
///
/// # Example
///
/// ```
/// use cipherlab::vigenere::generate_key;
///
/// let key = generate_key(10).unwrap();
/// assert_eq!(key.len(), 10);
/// assert!(key.chars().all(|c| c.is_ascii_uppercase()));
/// ```
pub fn generate_key(length: usize) -> Result<String> {
    if length == 0 {
        return Err(CipherError::InvalidLength);
    }

    let mut rng = rand::rng();
    let letters: Vec<char> = ALPHABET.chars().collect();
    let key = (0..length)
        .map(|_| letters[rng.random_range(0..letters.len())])
        .collect();
    Ok(key)
}
