//! Identity records.
//!
//! An identity is the durable record of a registrant: login name, contact
//! email and the hash of their password. Records are immutable once created.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered identity.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Unique identity ID, assigned at creation and never reassigned.
    pub id: Uuid,
    /// Login name (unique, exact-match).
    pub name: String,
    /// Contact email address. Display-only; never used for lookup.
    pub email: String,
    /// Password hash in PHC string format. Never the raw password.
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new identity.
///
/// The password must already be hashed; the store never sees plaintext.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    /// Login name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

impl NewIdentity {
    /// Create a new identity payload.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
