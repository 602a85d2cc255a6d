//! Error types for cipherlab

use thiserror::Error;

/// Main error type for all library operations
#[derive(Error, Debug)]
pub enum CipherError {
    /// Cipher key is empty
    #[error("Key must not be empty")]
    EmptyKey,

    /// Cipher key contains characters outside A-Z/a-z
    #[error("Key must be alphabetic: {0:?}")]
    InvalidKey(String),

    /// Requested length is zero
    #[error("Length must be a positive number")]
    InvalidLength,

    /// Required input string is empty
    #[error("Input must not be empty")]
    EmptyInput,

    /// Input is shorter than the requested analysis window
    #[error("Input length {length} is shorter than sequence length {sequence_length}")]
    InputTooShort {
        /// Actual input length
        length: usize,
        /// Requested window width
        sequence_length: usize,
    },

    /// Character has no mapping in the target encoding
    #[error("Unsupported character {0:?}")]
    UnsupportedCharacter(char),

    /// Encoded input could not be decoded
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Password hashing failed or a stored hash string is malformed
    #[error("Hash error: {0}")]
    HashError(String),

    /// Content does not fit into any QR code version
    #[error("Content too large for a QR code: {size} characters, max {max}")]
    ContentTooLarge {
        /// Content length in characters
        size: usize,
        /// Capacity of the largest version for the detected mode
        max: usize,
    },
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CipherError::EmptyKey;
        assert_eq!(err.to_string(), "Key must not be empty");

        let err = CipherError::InvalidKey("K3Y".to_string());
        assert!(err.to_string().contains("K3Y"));

        let err = CipherError::InputTooShort {
            length: 2,
            sequence_length: 5,
        };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('5'));

        let err = CipherError::UnsupportedCharacter('~');
        assert!(err.to_string().contains('~'));

        let err = CipherError::ContentTooLarge {
            size: 5000,
            max: 2953,
        };
        assert!(err.to_string().contains("5000"));
    }
}
