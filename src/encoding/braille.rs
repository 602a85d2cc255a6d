//! Braille encoding and decoding
//!
//! Unicode six-dot Braille for letters, digits and basic punctuation.
//! Digits reuse the a-j cells behind the number sign U+283C; capitals are
//! marked with U+2820. The grade-1 letter sign U+2830 terminates a digit
//! run when a letter from a-j follows, so every encoding decodes uniquely.

use crate::error::{CipherError, Result};

/// Number sign: following a-j cells read as digits 1-9, 0
const NUMBER_SIGN: char = '⠼';
/// Capital sign: the next letter is uppercase
const CAPITAL_SIGN: char = '⠠';
/// Letter sign: ends a digit run
const LETTER_SIGN: char = '⠰';

/// Letter cells a-z
const LETTERS: [(char, char); 26] = [
    ('a', '⠁'),
    ('b', '⠃'),
    ('c', '⠉'),
    ('d', '⠙'),
    ('e', '⠑'),
    ('f', '⠋'),
    ('g', '⠛'),
    ('h', '⠓'),
    ('i', '⠊'),
    ('j', '⠚'),
    ('k', '⠅'),
    ('l', '⠇'),
    ('m', '⠍'),
    ('n', '⠝'),
    ('o', '⠕'),
    ('p', '⠏'),
    ('q', '⠟'),
    ('r', '⠗'),
    ('s', '⠎'),
    ('t', '⠞'),
    ('u', '⠥'),
    ('v', '⠧'),
    ('w', '⠺'),
    ('x', '⠭'),
    ('y', '⠽'),
    ('z', '⠵'),
];

/// Punctuation cells
const PUNCTUATION: [(char, char); 8] = [
    (',', '⠂'),
    (';', '⠆'),
    (':', '⠒'),
    ('.', '⠲'),
    ('?', '⠦'),
    ('!', '⠖'),
    ('\'', '⠄'),
    ('-', '⠤'),
];

/// Digits 1-9, 0 in cell order (a-j)
const DIGITS: &str = "1234567890";

fn letter_cell(c: char) -> Option<char> {
    LETTERS
        .iter()
        .find(|&&(letter, _)| letter == c)
        .map(|&(_, cell)| cell)
}

fn punctuation_cell(c: char) -> Option<char> {
    PUNCTUATION
        .iter()
        .find(|&&(p, _)| p == c)
        .map(|&(_, cell)| cell)
}

/// Digit value of a cell, when the cell is one of a-j.
fn cell_digit(cell: char) -> Option<char> {
    LETTERS[..10]
        .iter()
        .position(|&(_, c)| c == cell)
        .and_then(|i| DIGITS.chars().nth(i))
}

/// Encode text as Unicode Braille cells.
///
/// # Example
///
/// ```
/// use cipherlab::encoding::braille::encode;
///
/// assert_eq!(encode("hi").unwrap(), "⠓⠊");
/// assert_eq!(encode("Ab 12").unwrap(), "⠠⠁⠃ ⠼⠁⠃");
/// ```
pub fn encode(text: &str) -> Result<String> {
    let mut output = String::with_capacity(text.len());
    let mut digit_mode = false;

    for c in text.chars() {
        if c.is_ascii_digit() {
            if !digit_mode {
                output.push(NUMBER_SIGN);
                digit_mode = true;
            }
            let index = DIGITS.find(c).unwrap_or(0);
            output.push(LETTERS[index].1);
        } else if c.is_ascii_lowercase() || c.is_ascii_uppercase() {
            let lower = c.to_ascii_lowercase();
            let cell = letter_cell(lower).ok_or(CipherError::UnsupportedCharacter(c))?;
            // A following a-j cell would still read as a digit
            if digit_mode && cell_digit(cell).is_some() && !c.is_ascii_uppercase() {
                output.push(LETTER_SIGN);
            }
            digit_mode = false;
            if c.is_ascii_uppercase() {
                output.push(CAPITAL_SIGN);
            }
            output.push(cell);
        } else if c == ' ' {
            digit_mode = false;
            output.push(' ');
        } else {
            let cell = punctuation_cell(c).ok_or(CipherError::UnsupportedCharacter(c))?;
            digit_mode = false;
            output.push(cell);
        }
    }
    Ok(output)
}

/// Decode Unicode Braille cells back to text.
///
/// # Example
///
/// ```
/// use cipherlab::encoding::braille::decode;
///
/// assert_eq!(decode("⠓⠑⠇⠇⠕ ⠼⠁⠃").unwrap(), "hello 12");
/// ```
pub fn decode(encoded: &str) -> Result<String> {
    let mut output = String::with_capacity(encoded.chars().count());
    let mut digit_mode = false;
    let mut capitalize = false;

    for cell in encoded.chars() {
        match cell {
            NUMBER_SIGN => digit_mode = true,
            LETTER_SIGN => digit_mode = false,
            CAPITAL_SIGN => {
                digit_mode = false;
                capitalize = true;
            }
            ' ' => {
                digit_mode = false;
                output.push(' ');
            }
            _ => {
                if digit_mode {
                    if let Some(digit) = cell_digit(cell) {
                        output.push(digit);
                        continue;
                    }
                    digit_mode = false;
                }
                if let Some(&(letter, _)) = LETTERS.iter().find(|&&(_, c)| c == cell) {
                    if capitalize {
                        output.push(letter.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        output.push(letter);
                    }
                } else if let Some(&(p, _)) = PUNCTUATION.iter().find(|&&(_, c)| c == cell) {
                    output.push(p);
                } else {
                    return Err(CipherError::DecodeError(format!(
                        "unknown braille cell {cell:?}"
                    )));
                }
            }
        }
    }
    Ok(output)
}
