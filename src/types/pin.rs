//! PIN hashing
//!
//! PINs are stored as salted Argon2id digests. The raw PIN only ever lives in
//! the caller's stack frame; it is never stored, logged, or compared directly.

use super::error::BankError;
use argon2::{Algorithm, Argon2, Params, Version};
use rand::Rng;
use std::fmt;

/// Length of the random salt generated per PIN
pub const SALT_LEN: usize = 16;

/// Length of the Argon2id output
pub const DIGEST_LEN: usize = 32;

/// Argon2id cost parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinHashConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for PinHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PinHashConfig {
    /// Cheapest parameters Argon2 accepts
    ///
    /// Only meant for tests and benchmarks that create many users.
    pub fn minimal() -> Self {
        Self {
            memory_kib: Params::MIN_M_COST,
            iterations: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
        }
    }

    fn hasher(&self) -> Result<Argon2<'static>, BankError> {
        let params = Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(DIGEST_LEN),
        )?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Fail early if these parameters cannot produce a hash
    pub fn validate(&self) -> Result<(), BankError> {
        self.hasher().map(|_| ())
    }

    fn digest(&self, pin: &str, salt: &[u8]) -> Result<[u8; DIGEST_LEN], BankError> {
        let mut digest = [0u8; DIGEST_LEN];
        self.hasher()?
            .hash_password_into(pin.as_bytes(), salt, &mut digest)?;
        Ok(digest)
    }
}

/// One-way, salted digest of a user's PIN
#[derive(Clone, PartialEq, Eq)]
pub struct PinHash {
    salt: [u8; SALT_LEN],
    digest: [u8; DIGEST_LEN],
    config: PinHashConfig,
}

impl PinHash {
    /// Hash a PIN with a fresh random salt
    ///
    /// # Errors
    ///
    /// Returns [`BankError::PinHashing`] if the configured parameters are
    /// rejected by Argon2.
    pub fn new(pin: &str, config: PinHashConfig) -> Result<Self, BankError> {
        let salt: [u8; SALT_LEN] = rand::thread_rng().gen();
        let digest = config.digest(pin, &salt)?;
        Ok(PinHash {
            salt,
            digest,
            config,
        })
    }

    /// Check a candidate PIN against the stored digest
    ///
    /// Re-hashes with the stored salt and parameters, then compares digests
    /// in constant time.
    pub fn verify(&self, pin: &str) -> bool {
        match self.config.digest(pin, &self.salt) {
            Ok(candidate) => constant_time_eq(&candidate, &self.digest),
            Err(e) => {
                tracing::error!(error = %e, "PIN verification failed");
                false
            }
        }
    }
}

// Digests must never show up in logs or panic messages
impl fmt::Debug for PinHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinHash").finish_non_exhaustive()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_correct_pin_verifies() {
        let hash = PinHash::new("1234", PinHashConfig::minimal()).unwrap();
        assert!(hash.verify("1234"));
    }

    #[rstest]
    #[case::wrong_digit("1235")]
    #[case::empty("")]
    #[case::longer("12345")]
    #[case::whitespace(" 1234")]
    fn test_wrong_pin_is_rejected(#[case] candidate: &str) {
        let hash = PinHash::new("1234", PinHashConfig::minimal()).unwrap();
        assert!(!hash.verify(candidate));
    }

    #[test]
    fn test_same_pin_gets_different_salts() {
        let a = PinHash::new("4444", PinHashConfig::minimal()).unwrap();
        let b = PinHash::new("4444", PinHashConfig::minimal()).unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn test_debug_does_not_leak_digest() {
        let hash = PinHash::new("1234", PinHashConfig::minimal()).unwrap();
        assert_eq!(format!("{:?}", hash), "PinHash { .. }");
    }

    #[test]
    fn test_invalid_params_are_reported() {
        let config = PinHashConfig {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };
        assert!(config.validate().is_err());
        let err = PinHash::new("1234", config).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_default_params_are_valid() {
        assert!(PinHashConfig::default().validate().is_ok());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
