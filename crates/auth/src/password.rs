//! Password digests.
//!
//! Credentials are stored as a hex-encoded SHA-256 digest and verified by
//! digest equality. No salt, no KDF, no constant-time compare; the stored
//! value is a pure function of the password.

use core::fmt::Write as _;

use sha2::{Digest, Sha256};

/// Digest a password for storage.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().fold(String::with_capacity(64), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Check a supplied password against a stored digest.
pub fn verify_password(stored_hex: &str, supplied: &str) -> bool {
    stored_hex == hash_password(supplied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_hex() {
        let a = hash_password("Admin");
        let b = hash_password("Admin");

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn verify_accepts_only_the_original_password() {
        let stored = hash_password("Admin");

        assert!(verify_password(&stored, "Admin"));
        assert!(!verify_password(&stored, "admin"));
        assert!(!verify_password(&stored, "wrong"));
        assert!(!verify_password(&stored, ""));
    }
}
