//! Text encodings: Base64, Morse code and Braille
//!
//! Each encoding is an independent pure-function pair with its own alphabet
//! table. Decoding rejects malformed input with a validation error.

pub mod base64;
pub mod braille;
pub mod morse;

pub use self::base64::{decode as base64_decode, encode as base64_encode};
pub use self::braille::{decode as braille_decode, encode as braille_encode};
pub use self::morse::{decode as morse_decode, encode as morse_encode};
