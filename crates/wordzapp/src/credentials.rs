//! Password hashing.
//!
//! Passwords are stretched with PBKDF2-HMAC-SHA256 over a random 16-byte
//! salt. Salt and derived key are stored base64-encoded next to the
//! iteration count, so the count can be raised later without invalidating
//! existing records.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub salt: String,
    pub hash: String,
    pub iterations: u32,
}

impl Credential {
    pub fn new(password: &str, iterations: u32) -> Self {
        let iterations = iterations.max(1);
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let key = derive_key(password, &salt, iterations);
        Self {
            salt: B64.encode(salt),
            hash: B64.encode(key),
            iterations,
        }
    }

    pub fn verify(&self, password: &str) -> bool {
        let (Ok(salt), Ok(expected)) = (B64.decode(&self.salt), B64.decode(&self.hash)) else {
            return false;
        };
        let key = derive_key(password, &salt, self.iterations.max(1));
        constant_time_eq(&key, &expected)
    }
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// Compares without short-circuiting on the first differing byte.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
