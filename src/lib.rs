//! # cipherlab
//!
//! An educational library of independent text transformation utilities.
//!
//! ## Features
//!
//! - Vigenère cipher with cryptanalysis helpers (dictionary brute force,
//!   Kasiski examination)
//! - Caesar cipher and ROT13
//! - Base64, Morse code and Braille encodings
//! - Password hashing wrapper (PBKDF2-HMAC-SHA256, scrypt)
//! - Text obfuscation toy
//! - QR code content-pattern analyzer (string-only, no image decoding)
//!
//! Every module is a self-contained set of pure functions: no shared state,
//! no I/O, no interaction between modules.
//!
//! ## Example
//!
//! ```
//! use cipherlab::vigenere;
//!
//! let ciphertext = vigenere::encrypt("HELLO, WORLD!", "KEY").unwrap();
//! assert_eq!(ciphertext, "RIJVS, UYVJN!");
//!
//! let plaintext = vigenere::decrypt(&ciphertext, "key").unwrap();
//! assert_eq!(plaintext, "HELLO, WORLD!");
//! ```

pub mod caesar;
pub mod encoding;
pub mod error;
pub mod obfuscate;
pub mod password;
pub mod qr;
pub mod vigenere;

// Re-export main types
pub use error::{CipherError, Result};
pub use obfuscate::ObfuscateOptions;
pub use password::HashScheme;
pub use qr::{QrAnalysis, QrContentKind, QrMode};
pub use vigenere::{AnalysisResult, BruteForceResult};

/// Default generated key length
pub const DEFAULT_KEY_LENGTH: usize = 8;

/// Default Kasiski examination window width
pub const DEFAULT_SEQUENCE_LENGTH: usize = 3;

/// Number of candidate key lengths reported by the Kasiski examination
pub const KEY_LENGTH_CANDIDATES: usize = 5;

/// Number of raw repeat distances reported by the Kasiski examination
pub const REPORTED_DISTANCES: usize = 10;

/// ROT13 shift value
pub const ROT13_SHIFT: i32 = 13;

/// Default PBKDF2 iteration count
pub const PBKDF2_ITERATIONS_DEFAULT: u32 = 100_000;

/// Salt length for password hashing, in bytes
pub const SALT_LENGTH: usize = 16;
