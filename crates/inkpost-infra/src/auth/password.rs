//! Argon2 hashing for back-office account passwords.

use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use inkpost_core::ports::{AuthError, PasswordService};

/// Argon2id with the crate's default parameters.
///
/// Logins for unknown accounts are checked against a decoy hash so they
/// cost the same as a wrong password on a real account.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
    decoy: OnceLock<Option<String>>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            decoy: OnceLock::new(),
        }
    }

    fn decoy_hash(&self) -> Option<&str> {
        self.decoy
            .get_or_init(|| self.hash("inkpost-decoy-account").ok())
            .as_deref()
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let stored = PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &stored) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::HashingError(e.to_string())),
        }
    }

    fn verify_absent(&self, password: &str) {
        match self.decoy_hash() {
            Some(decoy) => {
                let _ = self.verify(password, decoy);
            }
            None => tracing::warn!("Decoy password hash unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted() {
        let service = Argon2PasswordService::new();

        let first = service.hash("correct horse").unwrap();
        let second = service.hash("correct horse").unwrap();
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
        assert!(service.verify("correct horse", &first).unwrap());
        assert!(service.verify("correct horse", &second).unwrap());
    }

    #[test]
    fn test_wrong_password_is_a_mismatch_not_an_error() {
        let service = Argon2PasswordService::new();
        let hash = service.hash("correct horse").unwrap();

        assert!(!service.verify("battery staple", &hash).unwrap());
        assert!(!service.verify("", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let service = Argon2PasswordService::new();
        assert!(matches!(
            service.verify("anything", "plaintext"),
            Err(AuthError::HashingError(_))
        ));
    }

    #[test]
    fn test_unsupported_algorithm_is_an_error() {
        let service = Argon2PasswordService::new();
        let foreign = "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$YWJjZGVmZ2hpamtsbW5vcA";

        assert!(matches!(
            service.verify("anything", foreign),
            Err(AuthError::HashingError(_))
        ));
    }

    #[test]
    fn test_decoy_hash_is_built_once() {
        let service = Argon2PasswordService::new();

        service.verify_absent("guess");
        let first = service.decoy_hash().map(str::to_owned);
        service.verify_absent("another guess");

        assert!(first.is_some());
        assert_eq!(service.decoy_hash().map(str::to_owned), first);
    }
}
