use std::fmt;
use std::str::FromStr;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::AuthError;

/// How passwords are stored and compared.
///
/// `Plain` keeps the web client's behaviour: the password is stored as typed
/// and compared by exact string equality. `Argon2` stores an Argon2id PHC
/// string instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    #[default]
    Plain,
    Argon2,
}

impl PasswordScheme {
    /// Turn a typed password into its stored form.
    pub fn seal(&self, password: &str) -> Result<String, AuthError> {
        match self {
            Self::Plain => Ok(password.to_string()),
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| AuthError::Credential(e.to_string()))
            }
        }
    }

    pub fn verify(&self, stored: &str, candidate: &str) -> bool {
        match self {
            Self::Plain => stored == candidate,
            Self::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Argon2 => f.write_str("argon2"),
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "argon2" => Ok(Self::Argon2),
            other => Err(anyhow::anyhow!("Unknown password scheme: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_exact_equality() {
        let scheme = PasswordScheme::Plain;
        let stored = scheme.seal("p1").unwrap();
        assert_eq!(stored, "p1");
        assert!(scheme.verify(&stored, "p1"));
        assert!(!scheme.verify(&stored, "P1"));
        assert!(!scheme.verify(&stored, "p1 "));
    }

    #[test]
    fn argon2_hides_and_verifies() {
        let scheme = PasswordScheme::Argon2;
        let stored = scheme.seal("p1").unwrap();
        assert_ne!(stored, "p1");
        assert!(stored.starts_with("$argon2"));
        assert!(scheme.verify(&stored, "p1"));
        assert!(!scheme.verify(&stored, "p2"));
    }

    #[test]
    fn argon2_salts_each_seal() {
        let scheme = PasswordScheme::Argon2;
        let a = scheme.seal("p1").unwrap();
        let b = scheme.seal("p1").unwrap();
        assert_ne!(a, b);
        assert!(scheme.verify(&a, "p1") && scheme.verify(&b, "p1"));
    }

    #[test]
    fn argon2_rejects_unhashed_storage() {
        assert!(!PasswordScheme::Argon2.verify("p1", "p1"));
    }

    #[test]
    fn parses_config_values() {
        assert_eq!("plain".parse::<PasswordScheme>().unwrap(), PasswordScheme::Plain);
        assert_eq!(" Argon2 ".parse::<PasswordScheme>().unwrap(), PasswordScheme::Argon2);
        assert!("bcrypt".parse::<PasswordScheme>().is_err());
    }
}
