//! bcrypt wrappers for the admin password.

use crate::error::AppResult;

pub fn hash(password: &str, cost: u32) -> AppResult<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Malformed stored hashes count as a mismatch rather than an error.
pub fn verify(password: &str, hash: &str) -> AppResult<bool> {
    match bcrypt::verify(password, hash) {
        Ok(matches) => Ok(matches),
        Err(bcrypt::BcryptError::InvalidHash(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
