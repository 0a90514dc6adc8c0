//! Operator credentials and Argon2id password checks.
//!
//! Hashes are PHC strings, so the algorithm parameters and salt travel with
//! the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on a mismatch and `Err` only for a malformed hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// The single operator account.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

impl AdminCredentials {
    /// Load the operator account from environment variables.
    ///
    /// | Env Var               | Required                        |
    /// |-----------------------|---------------------------------|
    /// | `ADMIN_USERNAME`      | **yes**                         |
    /// | `ADMIN_PASSWORD_HASH` | one of the two (PHC string)     |
    /// | `ADMIN_PASSWORD`      | one of the two (hashed at boot) |
    ///
    /// # Panics
    ///
    /// Panics if the username or both password variables are missing, or if
    /// the given hash is not a valid PHC string.
    pub fn from_env() -> Self {
        let username =
            std::env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set in the environment");
        assert!(!username.is_empty(), "ADMIN_USERNAME must not be empty");

        let password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) if !hash.is_empty() => {
                PasswordHash::new(&hash).expect("ADMIN_PASSWORD_HASH must be a PHC string");
                hash
            }
            _ => {
                let plain = std::env::var("ADMIN_PASSWORD")
                    .expect("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set");
                tracing::warn!(
                    "ADMIN_PASSWORD is set in plain text; store ADMIN_PASSWORD_HASH instead"
                );
                hash_password(&plain).expect("Failed to hash ADMIN_PASSWORD")
            }
        };

        Self {
            username,
            password_hash,
        }
    }

    /// Check a login attempt. The password is verified even for an unknown
    /// username so both failures take the same time.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, argon2::password_hash::Error> {
        let password_ok = verify_password(password, &self.password_hash)?;
        Ok(password_ok && username == self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("eski-para-1923").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("eski-para-1923", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("x", "not-a-phc-string").is_err());
    }

    #[test]
    fn credentials_require_both_parts() {
        let creds = AdminCredentials {
            username: "operator".into(),
            password_hash: hash_password("secret").unwrap(),
        };

        assert!(creds.verify("operator", "secret").unwrap());
        assert!(!creds.verify("operator", "Secret").unwrap());
        assert!(!creds.verify("someone", "secret").unwrap());
    }
}
