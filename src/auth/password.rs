//! Password hashing and verification for Arcade.
//!
//! Uses Argon2id. Hashes are emitted as PHC strings, so the salt and cost
//! parameters travel inside the hash itself and verification needs no
//! external state.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use thiserror::Error;

use crate::config::HasherConfig;

/// Password hashing and verification errors.
///
/// A wrong password ([`PasswordError::BadPassword`]) is deliberately a
/// different variant from a stored hash that cannot be parsed
/// ([`PasswordError::MalformedHash`]): the latter is a server-side fault and
/// must never be reported to a client as "wrong password".
#[derive(Error, Debug)]
pub enum PasswordError {
    /// The password does not match the stored hash.
    #[error("password does not match")]
    BadPassword,

    /// The stored hash is not a valid PHC string.
    #[error("stored password hash is malformed")]
    MalformedHash,

    /// The hashing backend failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

fn build_argon2(config: &HasherConfig) -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(
        config.memory_kib,
        config.iterations,
        config.parallelism,
        None,
    )
    .map_err(|e| PasswordError::Hashing(e.to_string()))?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a password with the configured cost parameters.
///
/// Returns a PHC-formatted string embedding the salt and parameters.
pub fn hash_password(password: &str, config: &HasherConfig) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = build_argon2(config)?;

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash.
///
/// The comparison is constant-time within the argon2 crate's guarantees.
/// Cost parameters are taken from the stored hash, not from configuration,
/// so hashes created under older settings keep verifying.
pub fn verify_password(password: &str, stored: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(()),
        Err(password_hash::Error::Password) => Err(PasswordError::BadPassword),
        Err(e) => Err(PasswordError::Hashing(e.to_string())),
    }
}
