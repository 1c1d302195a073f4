//! Identity registration.

use thiserror::Error;
use tracing::info;

use crate::auth::password::{hash_password, PasswordError};
use crate::auth::validation::{validate_registration, ValidationError};
use crate::config::HasherConfig;
use crate::store::{Identity, IdentityStore, NewIdentity, StoreError};

/// Registration failure reasons.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// A field failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The login name is already registered.
    #[error("username taken")]
    DuplicateName,

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// The identity store malfunctioned.
    #[error("identity store error: {0}")]
    Store(String),
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired login name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Register a new identity.
///
/// Validates the fields, rejects an already-taken name before paying for the
/// hash, then hashes and inserts. The pre-check is advisory: the store's
/// insert re-checks the name atomically, so a race between two registrations
/// of the same name still leaves exactly one winner.
///
/// CPU-bound (argon2 hashing); callers on an async runtime should run this
/// on a blocking thread.
pub fn register(
    store: &dyn IdentityStore,
    config: &HasherConfig,
    request: RegistrationRequest,
) -> Result<Identity, RegistrationError> {
    validate_registration(&request.name, &request.email, &request.password)?;

    if store
        .find_by_name(&request.name)
        .map_err(|e| RegistrationError::Store(e.to_string()))?
        .is_some()
    {
        return Err(RegistrationError::DuplicateName);
    }

    let password_hash = hash_password(&request.password, config)?;

    let identity = store
        .insert(NewIdentity::new(request.name, request.email, password_hash))
        .map_err(|e| match e {
            StoreError::DuplicateName => RegistrationError::DuplicateName,
            other => RegistrationError::Store(other.to_string()),
        })?;

    info!(name = %identity.name, id = %identity.id, "new identity registered");
    Ok(identity)
}
