//! Cryptanalysis helpers for the Vigenère cipher
//!
//! Two heuristics: a dictionary brute force that ranks candidate keys by
//! English letter frequency, and a Kasiski examination that estimates the
//! key length from the divisors of repeated-sequence distances.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{CipherError, Result};
use crate::{KEY_LENGTH_CANDIDATES, REPORTED_DISTANCES};

use super::decrypt;

/// Relative English letter frequencies (percent), indexed A-Z.
const EN_FREQ: [f64; 26] = [
    8.50, 2.07, 4.54, 3.38, 11.16, 1.81, 2.47, 3.00, 7.54, 0.20, 1.10, 5.49,
    3.01, 6.65, 7.16, 3.17, 0.20, 7.58, 5.74, 9.35, 3.63, 1.01, 1.29, 0.29,
    1.78, 0.07,
];

/// Built-in dictionary used when the caller supplies no candidate words.
const DEFAULT_WORDS: [&str; 20] = [
    "KEY", "PASSWORD", "SECRET", "CIPHER", "CRYPTO", "HELLO", "WORLD",
    "ADMIN", "MASTER", "SHADOW", "DRAGON", "MONKEY", "LETMEIN", "WELCOME",
    "SECURITY", "QWERTY", "LOVE", "MONEY", "TEST", "GOD",
];

/// One candidate decryption from the dictionary brute force
#[derive(Debug, Clone, Serialize)]
pub struct BruteForceResult {
    /// Candidate key that produced this decryption
    pub key: String,
    /// Decrypted text under that key
    pub plaintext: String,
    /// English-likeness score (sum of letter frequency weights)
    pub score: f64,
}

/// Result of the Kasiski examination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Candidate key lengths, most frequent divisor first
    pub key_lengths: Vec<usize>,
    /// First few raw distances between repeated sequences
    pub distances: Vec<usize>,
    /// Single most frequent divisor, `None` when no repeats were found
    pub likely_key_length: Option<usize>,
    /// Total number of repeat distances observed
    pub repetition_count: usize,
}

/// Score a text by summing English letter-frequency weights.
///
/// Non-letter characters contribute nothing. Higher means more English-like.
fn frequency_score(text: &str) -> f64 {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| EN_FREQ[(c.to_ascii_uppercase() as u8 - b'A') as usize])
        .sum()
}

/// Try a list of candidate keys against `ciphertext`.
///
/// Every candidate decryption is scored with [`frequency_score`] and the
/// results are returned best-first. A candidate that fails to decrypt (for
/// example a non-alphabetic dictionary entry) is skipped, so one bad word
/// never aborts the batch. When `words` is empty a built-in list of ~20
/// common English and technical words is used.
///
/// The ranking is a heuristic: the top entry is the most English-like
/// decryption among the tried keys, not necessarily the right one.
///
/// # Example
///
/// ```
/// use cipherlab::vigenere::{brute_force, encrypt};
///
/// let ciphertext = encrypt("HELLOWORLD", "KEY").unwrap();
/// let results = brute_force(&ciphertext, &["KEY"]).unwrap();
/// assert_eq!(results[0].key, "KEY");
/// assert_eq!(results[0].plaintext, "HELLOWORLD");
/// ```
pub fn brute_force(ciphertext: &str, words: &[&str]) -> Result<Vec<BruteForceResult>> {
    if ciphertext.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let candidates: Vec<&str> = if words.is_empty() {
        DEFAULT_WORDS.to_vec()
    } else {
        words.to_vec()
    };

    let mut results = Vec::with_capacity(candidates.len());
    for word in candidates {
        // Skip-and-continue on invalid dictionary entries
        let Ok(plaintext) = decrypt(ciphertext, word) else {
            continue;
        };
        let score = frequency_score(&plaintext);
        results.push(BruteForceResult {
            key: word.to_string(),
            plaintext,
            score,
        });
    }

    // Stable sort keeps input order on equal scores
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(results)
}

/// Divisors of `d` from 2 up to and including `d`, by trial division.
fn divisors(d: usize) -> Vec<usize> {
    let mut result = Vec::new();
    let mut i = 1;
    while i * i <= d {
        if d % i == 0 {
            if i >= 2 {
                result.push(i);
            }
            let pair = d / i;
            if pair >= 2 && pair != i {
                result.push(pair);
            }
        }
        i += 1;
    }
    result
}

/// Kasiski examination: estimate the key length from repeated sequences.
///
/// The ciphertext is stripped to uppercase letters, then every window of
/// `sequence_length` characters is indexed by its starting offsets. The
/// distances between consecutive occurrences of a repeated window tend to
/// be multiples of the key length, so the divisors of those distances are
/// tallied and the most frequent ones reported as candidate key lengths.
/// Divisor 1 is excluded from the tally since it divides everything.
///
/// Finding no repeats is not an error: `key_lengths` comes back empty and
/// `likely_key_length` is `None`.
///
/// # Errors
///
/// Fails when `sequence_length` is zero or `ciphertext` is shorter than it.
pub fn analyze(ciphertext: &str, sequence_length: usize) -> Result<AnalysisResult> {
    if sequence_length == 0 {
        return Err(CipherError::InvalidLength);
    }
    let length = ciphertext.chars().count();
    if length < sequence_length {
        return Err(CipherError::InputTooShort {
            length,
            sequence_length,
        });
    }

    // Working sequence: uppercase letters only
    let stripped: String = ciphertext
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    if stripped.len() >= sequence_length {
        for i in 0..=stripped.len() - sequence_length {
            positions
                .entry(&stripped[i..i + sequence_length])
                .or_default()
                .push(i);
        }
    }

    // Distances in first-occurrence scan order, for deterministic output
    let mut deltas = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    if stripped.len() >= sequence_length {
        for i in 0..=stripped.len() - sequence_length {
            let window = &stripped[i..i + sequence_length];
            if !seen.insert(window) {
                continue;
            }
            if let Some(offsets) = positions.get(window) {
                for pair in offsets.windows(2) {
                    deltas.push(pair[1] - pair[0]);
                }
            }
        }
    }

    let mut tally: HashMap<usize, usize> = HashMap::new();
    for &delta in &deltas {
        for divisor in divisors(delta) {
            *tally.entry(divisor).or_default() += 1;
        }
    }

    let mut ranked: Vec<(usize, usize)> = tally.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let key_lengths: Vec<usize> = ranked
        .iter()
        .take(KEY_LENGTH_CANDIDATES)
        .map(|&(divisor, _)| divisor)
        .collect();
    let likely_key_length = key_lengths.first().copied();
    let repetition_count = deltas.len();
    deltas.truncate(REPORTED_DISTANCES);

    Ok(AnalysisResult {
        key_lengths,
        distances: deltas,
        likely_key_length,
        repetition_count,
    })
}
