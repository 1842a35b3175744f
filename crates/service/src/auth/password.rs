use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;
use tracing::warn;

use crate::errors::ServiceError;

/// Argon2id hashing with a fresh random salt per password.
///
/// Hashes are stored in PHC string form, so verification reads the cost
/// parameters back from the stored value.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self { Self { params: Params::default() } }
}

impl PasswordHasher {
    /// Custom cost (memory KiB, iterations, lanes). Low values keep tests fast.
    pub fn with_cost(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, ServiceError> {
        let params = Params::new(m_cost, t_cost, p_cost, None).map_err(|e| ServiceError::Hash(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    pub fn hash(&self, password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| ServiceError::Hash(e.to_string()))
    }

    /// `false` on mismatch and on stored values that are not a PHC hash.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let parsed = match PasswordHash::new(stored) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "stored password hash is not readable");
                return false;
            }
        };
        self.argon2().verify_password(password.as_bytes(), &parsed).is_ok()
    }
}
