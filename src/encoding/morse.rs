//! Morse code encoding and decoding
//!
//! International (ITU) Morse for letters, digits and common punctuation.
//! Letters within a word are separated by a single space, words by " / ".

use crate::error::{CipherError, Result};

/// ITU Morse table
const MORSE_TABLE: [(char, &str); 52] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('"', ".-..-."),
    ('@', ".--.-."),
];

fn to_morse(c: char) -> Option<&'static str> {
    let upper = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|&&(letter, _)| letter == upper)
        .map(|&(_, code)| code)
}

fn from_morse(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(letter, _)| letter)
}

/// Encode text as Morse code.
///
/// Input case is ignored; runs of whitespace collapse to one word gap.
///
/// # Example
///
/// ```
/// use cipherlab::encoding::morse::encode;
///
/// assert_eq!(encode("SOS").unwrap(), "... --- ...");
/// assert_eq!(encode("hi you").unwrap(), ".... .. / -.-- --- ..-");
/// ```
pub fn encode(text: &str) -> Result<String> {
    let mut words = Vec::new();
    for word in text.split_whitespace() {
        let mut codes = Vec::with_capacity(word.len());
        for c in word.chars() {
            let code = to_morse(c).ok_or(CipherError::UnsupportedCharacter(c))?;
            codes.push(code);
        }
        words.push(codes.join(" "));
    }
    Ok(words.join(" / "))
}

/// Decode Morse code back to uppercase text.
///
/// Accepts "/" as a word separator; unknown code groups are rejected.
///
/// # Example
///
/// ```
/// use cipherlab::encoding::morse::decode;
///
/// assert_eq!(decode("... --- ...").unwrap(), "SOS");
/// ```
pub fn decode(encoded: &str) -> Result<String> {
    let mut output = String::new();
    for token in encoded.split_whitespace() {
        if token == "/" {
            output.push(' ');
            continue;
        }
        let letter = from_morse(token)
            .ok_or_else(|| CipherError::DecodeError(format!("unknown code group {token:?}")))?;
        output.push(letter);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_letters_and_digits() {
        assert_eq!(encode("SOS").unwrap(), "... --- ...");
        assert_eq!(encode("73").unwrap(), "--... ...--");
    }

    #[test]
    fn test_case_ignored() {
        assert_eq!(encode("sos").unwrap(), encode("SOS").unwrap());
    }

    #[test]
    fn test_word_separator() {
        assert_eq!(
            encode("HELLO WORLD").unwrap(),
            ".... . .-.. .-.. --- / .-- --- .-. .-.. -.."
        );
        assert_eq!(decode(".... .. / -.-- --- ..-").unwrap(), "HI YOU");
    }

    #[test]
    fn test_round_trip() {
        let text = "CQ CQ DE N0CALL, QTH: GRID EM12!";
        let encoded = encode(text).unwrap();
        assert_eq!(decode(&encoded).unwrap(), text.to_uppercase());
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(encode("A  B").unwrap(), ".- / -...");
        assert_eq!(encode("  A ").unwrap(), ".-");
    }

    #[test]
    fn test_unsupported_character() {
        assert!(matches!(
            encode("naïve"),
            Err(CipherError::UnsupportedCharacter('ï'))
        ));
    }

    #[test]
    fn test_unknown_code_group() {
        assert!(matches!(
            decode("...---..."),
            Err(CipherError::DecodeError(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }
}
