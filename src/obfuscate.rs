//! Text obfuscation toy
//!
//! Leetspeak substitution, reversal and aLtErNaTiNg case. Obfuscation is a
//! party trick, not encryption: anyone can undo it by eye. `deobfuscate`
//! undoes the leet map and the reversal; original letter case is lost.

const LEET_MAP: [(char, char); 7] = [
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('b', '8'),
];

/// Options for text obfuscation
#[derive(Debug, Clone)]
pub struct ObfuscateOptions {
    /// Replace letters with look-alike digits (a->4, e->3, ...)
    pub leet: bool,
    /// Reverse the whole string
    pub reverse: bool,
    /// Alternate upper/lower case across letters
    pub alternate_case: bool,
}

impl Default for ObfuscateOptions {
    fn default() -> Self {
        Self {
            leet: true,
            reverse: false,
            alternate_case: false,
        }
    }
}

/// Obfuscate text according to the options.
///
/// Transformations apply in a fixed order: case, then leet, then reversal.
///
/// # Example
///
/// ```
/// use cipherlab::obfuscate::{obfuscate, ObfuscateOptions};
///
/// let options = ObfuscateOptions::default();
/// assert_eq!(obfuscate("secret message", &options), "53cr37 m3554g3");
/// ```
pub fn obfuscate(text: &str, options: &ObfuscateOptions) -> String {
    let mut letter_index = 0usize;
    let mut out: String = text
        .chars()
        .map(|c| {
            let mut c = c;
            if options.alternate_case && c.is_ascii_alphabetic() {
                c = if letter_index % 2 == 0 {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                };
                letter_index += 1;
            }
            if options.leet {
                let lower = c.to_ascii_lowercase();
                if let Some(&(_, digit)) = LEET_MAP.iter().find(|&&(letter, _)| letter == lower) {
                    c = digit;
                }
            }
            c
        })
        .collect();

    if options.reverse {
        out = out.chars().rev().collect();
    }
    out
}

/// Best-effort inverse of [`obfuscate`] for the same options.
///
/// The leet map is unambiguous in reverse, so leet and reversal round-trip
/// exactly for lowercase input. Case changes are not recoverable.
pub fn deobfuscate(text: &str, options: &ObfuscateOptions) -> String {
    let source: String = if options.reverse {
        text.chars().rev().collect()
    } else {
        text.to_string()
    };

    source
        .chars()
        .map(|c| {
            if options.leet {
                if let Some(&(letter, _)) = LEET_MAP.iter().find(|&&(_, digit)| digit == c) {
                    return letter;
                }
            }
            c
        })
        .collect()
}
