//! Credential authentication.
//!
//! Turns a (name, password) pair into a verified [`Identity`] or a typed
//! failure. Stateless across attempts: no lockout, no backoff.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::auth::password::{verify_password, PasswordError};
use crate::store::{Identity, IdentityStore};

/// Login failure reasons.
///
/// [`AuthError::UnknownUser`] and [`AuthError::BadCredential`] carry
/// distinct user-facing messages. That aids debugging but lets a caller
/// probe which names exist; deployments that care can collapse the two
/// messages at the presentation layer.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No identity registered under that name.
    #[error("no user found with that name")]
    UnknownUser,

    /// The name exists but the password does not match.
    #[error("password incorrect")]
    BadCredential,

    /// The hasher or the store malfunctioned. Not a credential problem;
    /// must not be reported as one.
    #[error("authentication failed: {0}")]
    Internal(String),
}

/// Verify a (name, password) pair against the identity store.
///
/// CPU-bound (argon2 verification); callers on an async runtime should run
/// this on a blocking thread.
pub fn authenticate(
    store: &dyn IdentityStore,
    name: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    let identity = store
        .find_by_name(name)
        .map_err(|e| {
            error!(error = %e, "identity lookup failed during login");
            AuthError::Internal(e.to_string())
        })?
        .ok_or_else(|| {
            warn!(name = %name, "login failed: unknown user");
            AuthError::UnknownUser
        })?;

    match verify_password(password, &identity.password_hash) {
        Ok(()) => {
            info!(name = %identity.name, id = %identity.id, "login verified");
            Ok(identity)
        }
        Err(PasswordError::BadPassword) => {
            warn!(name = %identity.name, "login failed: wrong password");
            Err(AuthError::BadCredential)
        }
        Err(e) => {
            error!(name = %identity.name, error = %e, "password verification malfunctioned");
            Err(AuthError::Internal(e.to_string()))
        }
    }
}
