//! Integration tests for cipherlab
//!
//! Exercises the public API the way the CLI and demo callers do: plain
//! strings in, plain records out.

use cipherlab::{caesar, encoding, obfuscate, password, qr, vigenere};
use cipherlab::{CipherError, HashScheme, ObfuscateOptions, QrContentKind, QrMode};
use rand::Rng;

const TEST_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\
    0123456789 _!@#$%^&*()<>,./?";

fn random_string(len: usize) -> String {
    let mut rng = rand::rng();
    let chars: Vec<char> = TEST_CHARS.chars().collect();
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// Stress test: random text and random keys round-trip, up to 1000 chars
#[test]
fn test_vigenere_stress_round_trips() {
    let mut rng = rand::rng();

    for i in 0..100 {
        let key_len: usize = rng.random_range(1..30);
        let text_len: usize = rng.random_range(1..1000);

        let key = vigenere::generate_key(key_len)
            .unwrap_or_else(|_| panic!("Key generation should succeed, iteration {}", i));
        let text = random_string(text_len);

        let encrypted = vigenere::encrypt(&text, &key)
            .unwrap_or_else(|_| panic!("Encryption should succeed, iteration {}", i));
        assert_eq!(encrypted.len(), text.len(), "Length mismatch at iteration {}", i);

        let decrypted = vigenere::decrypt(&encrypted, &key)
            .unwrap_or_else(|_| panic!("Decryption should succeed, iteration {}", i));
        assert_eq!(decrypted, text, "Mismatch at iteration {}", i);
    }
}

/// Non-letter characters stay in place across the whole pipeline
#[test]
fn test_vigenere_preserves_non_letter_positions() {
    let text = "No. 10, Downing St. - London (SW1A 2AA)";
    let encrypted = vigenere::encrypt(text, "WHITEHALL").unwrap();

    for (original, transformed) in text.chars().zip(encrypted.chars()) {
        if original.is_ascii_alphabetic() {
            assert!(transformed.is_ascii_alphabetic());
            assert_eq!(
                original.is_ascii_uppercase(),
                transformed.is_ascii_uppercase()
            );
        } else {
            assert_eq!(original, transformed);
        }
    }
}

/// The documented end-to-end attack flow: analyze, then brute force
#[test]
fn test_vigenere_analysis_pipeline() {
    let plaintext = "THE ENEMY APPROACHES FROM THE NORTH BRIDGE AT DAWN ".repeat(3);
    let key = "SECRET";
    let ciphertext = vigenere::encrypt(&plaintext, key).unwrap();

    let analysis = vigenere::analyze(&ciphertext, 3).unwrap();
    assert!(analysis.repetition_count > 0);
    assert!(analysis.key_lengths.contains(&key.len()));

    let results = vigenere::brute_force(&ciphertext, &["WRONG", "SECRET", "CIPHER"]).unwrap();
    assert_eq!(results[0].key, "SECRET");
    assert!(vigenere::verify(&plaintext, &ciphertext, "secret").unwrap());
}

/// Result records serialize for external callers
#[test]
fn test_results_serialize_to_json() {
    let ciphertext = vigenere::encrypt("HELLOWORLD", "KEY").unwrap();

    let results = vigenere::brute_force(&ciphertext, &["KEY"]).unwrap();
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["key"], "KEY");
    assert_eq!(json[0]["plaintext"], "HELLOWORLD");

    let analysis = vigenere::analyze(&ciphertext, 3).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert!(json["key_lengths"].is_array());
    assert_eq!(json["repetition_count"], 0);

    let qr = qr::analyze("HELLO WORLD").unwrap();
    let json = serde_json::to_value(&qr).unwrap();
    assert_eq!(json["version"], 1);
}

#[test]
fn test_caesar_and_rot13() {
    let text = "Veni, vidi, vici.";
    assert_eq!(caesar::decrypt(&caesar::encrypt(text, 7), 7), text);
    assert_eq!(caesar::rot13(&caesar::rot13(text)), text);
    // ROT13 equals a Vigenère encryption under the single-letter key N
    assert_eq!(
        caesar::rot13(text),
        vigenere::encrypt(text, "N").unwrap()
    );
}

#[test]
fn test_encoding_round_trips() {
    let text = "Rendezvous at 21:30, gate 4!";

    let b64 = encoding::base64_encode(text);
    assert_eq!(encoding::base64_decode(&b64).unwrap(), text);

    let morse = encoding::morse_encode(text).unwrap();
    assert_eq!(encoding::morse_decode(&morse).unwrap(), text.to_uppercase());

    let braille = encoding::braille_encode(text).unwrap();
    assert_eq!(encoding::braille_decode(&braille).unwrap(), text);
}

#[test]
fn test_password_hash_and_verify() {
    let stored = password::hash_password("tr0ub4dor&3", HashScheme::Pbkdf2 { iterations: 1000 })
        .unwrap();
    assert!(password::verify_password("tr0ub4dor&3", &stored).unwrap());
    assert!(!password::verify_password("troubador", &stored).unwrap());
}

#[test]
fn test_obfuscate_round_trip() {
    let options = ObfuscateOptions {
        leet: true,
        reverse: true,
        alternate_case: false,
    };
    let text = "the treasure is buried under the elm";
    let obfuscated = obfuscate::obfuscate(text, &options);
    assert_eq!(obfuscate::deobfuscate(&obfuscated, &options), text);
}

#[test]
fn test_qr_analysis() {
    // ';' is outside QR alphanumeric mode, so Wi-Fi configs are byte mode
    let analysis = qr::analyze("WIFI:T:WPA;S:HOMENET;P:HUNTER2;;").unwrap();
    assert_eq!(analysis.kind, QrContentKind::Wifi);
    assert_eq!(analysis.mode, QrMode::Byte);
    assert_eq!(analysis.version, 3);

    let analysis = qr::analyze("https://example.com/a/b?q=1").unwrap();
    assert_eq!(analysis.kind, QrContentKind::Url);
    assert_eq!(analysis.mode, QrMode::Byte);
}

/// Validation failures surface as errors, never panics or partial output
#[test]
fn test_validation_errors() {
    assert!(matches!(
        vigenere::encrypt("HELLO", ""),
        Err(CipherError::EmptyKey)
    ));
    assert!(matches!(
        vigenere::analyze("AB", 5),
        Err(CipherError::InputTooShort { .. })
    ));
    assert!(matches!(
        vigenere::brute_force("", &[]),
        Err(CipherError::EmptyInput)
    ));
    assert!(matches!(
        vigenere::generate_key(0),
        Err(CipherError::InvalidLength)
    ));
    assert!(matches!(qr::analyze(""), Err(CipherError::EmptyInput)));
}
