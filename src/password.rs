//! Password hashing wrapper
//!
//! Thin wrapper over PBKDF2-HMAC-SHA256 and scrypt. Hashes are stored as
//! self-describing strings so verification needs no side channel:
//!
//! ```text
//! pbkdf2-sha256$100000$<salt hex>$<hash hex>
//! scrypt$15$<salt hex>$<hash hex>
//! ```
//!
//! This is deliberately not bcrypt or Argon2; the module exists to show the
//! salt-iterate-compare shape of password storage, not to compete with a
//! hardened password hashing library.

use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use scrypt::Params;
use sha2::Sha256;

use crate::SALT_LENGTH;
use crate::error::{CipherError, Result};

const PBKDF2_ID: &str = "pbkdf2-sha256";
const SCRYPT_ID: &str = "scrypt";
const HASH_LENGTH: usize = 32;

const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Supported hashing schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// PBKDF2 with HMAC-SHA256 and the given iteration count
    Pbkdf2 {
        /// Iteration count, must be at least 1
        iterations: u32,
    },
    /// scrypt with cost factor 2^log_n, r=8, p=1
    Scrypt {
        /// Base-2 logarithm of the scrypt cost parameter N
        log_n: u8,
    },
}

impl Default for HashScheme {
    fn default() -> Self {
        Self::Pbkdf2 {
            iterations: crate::PBKDF2_ITERATIONS_DEFAULT,
        }
    }
}

fn random_salt() -> [u8; SALT_LENGTH] {
    let mut rng = rand::rng();
    let mut salt = [0u8; SALT_LENGTH];
    rng.fill(&mut salt[..]);
    salt
}

fn derive(password: &str, salt: &[u8], scheme: HashScheme) -> Result<[u8; HASH_LENGTH]> {
    let mut out = [0u8; HASH_LENGTH];
    match scheme {
        HashScheme::Pbkdf2 { iterations } => {
            if iterations == 0 {
                return Err(CipherError::HashError(
                    "iteration count must be at least 1".to_string(),
                ));
            }
            pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut out);
        }
        HashScheme::Scrypt { log_n } => {
            let params = Params::new(log_n, SCRYPT_R, SCRYPT_P, HASH_LENGTH)
                .map_err(|e| CipherError::HashError(e.to_string()))?;
            scrypt::scrypt(password.as_bytes(), salt, &params, &mut out)
                .map_err(|e| CipherError::HashError(e.to_string()))?;
        }
    }
    Ok(out)
}

/// Hash a password with a fresh random salt.
///
/// Returns a self-describing `scheme$params$salt$hash` string suitable for
/// [`verify_password`].
///
/// # Example
///
/// ```
/// use cipherlab::password::{hash_password, verify_password, HashScheme};
///
/// let stored = hash_password("hunter2", HashScheme::default()).unwrap();
/// assert!(verify_password("hunter2", &stored).unwrap());
/// assert!(!verify_password("hunter3", &stored).unwrap());
/// ```
pub fn hash_password(password: &str, scheme: HashScheme) -> Result<String> {
    let salt = random_salt();
    let hash = derive(password, &salt, scheme)?;

    let stored = match scheme {
        HashScheme::Pbkdf2 { iterations } => format!(
            "{}${}${}${}",
            PBKDF2_ID,
            iterations,
            hex::encode(salt),
            hex::encode(hash)
        ),
        HashScheme::Scrypt { log_n } => format!(
            "{}${}${}${}",
            SCRYPT_ID,
            log_n,
            hex::encode(salt),
            hex::encode(hash)
        ),
    };
    Ok(stored)
}

/// Check a password against a stored hash string.
///
/// Recomputes the hash with the salt and parameters embedded in `stored`.
/// A malformed stored string is an error; a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, stored: &str) -> Result<bool> {
    let parts: Vec<&str> = stored.split('$').collect();
    let [scheme_id, params, salt_hex, hash_hex] = parts[..] else {
        return Err(CipherError::HashError(
            "stored hash must have 4 $-separated fields".to_string(),
        ));
    };

    let scheme = match scheme_id {
        PBKDF2_ID => {
            let iterations: u32 = params
                .parse()
                .map_err(|_| CipherError::HashError(format!("bad iteration count {params:?}")))?;
            HashScheme::Pbkdf2 { iterations }
        }
        SCRYPT_ID => {
            let log_n: u8 = params
                .parse()
                .map_err(|_| CipherError::HashError(format!("bad cost parameter {params:?}")))?;
            HashScheme::Scrypt { log_n }
        }
        other => {
            return Err(CipherError::HashError(format!("unknown scheme {other:?}")));
        }
    };

    let salt = hex::decode(salt_hex).map_err(|e| CipherError::HashError(e.to_string()))?;
    let expected = hex::decode(hash_hex).map_err(|e| CipherError::HashError(e.to_string()))?;
    let actual = derive(password, &salt, scheme)?;
    Ok(actual[..] == expected[..])
}
