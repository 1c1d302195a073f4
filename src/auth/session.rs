//! Session management.
//!
//! A session binds an opaque client-held token to one identity's ID. Only
//! the ID is kept server-side; the full record is rehydrated from the
//! identity store on every request. A token that no longer resolves to a
//! live identity is treated as no session at all.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::store::{Identity, IdentityStore, StoreError};

/// Default session lifetime (24 hours).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// An established session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token handed to the client.
    pub token: String,
    /// ID of the identity this session references.
    pub identity_id: Uuid,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
    /// When the session stops being honored.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    fn new(identity_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::from_std(ttl).unwrap_or_default();
        Self {
            token: Uuid::new_v4().to_string(),
            identity_id,
            created_at: now,
            expires_at,
        }
    }

    /// Whether the session has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Server-side session registry.
///
/// Methods take `&mut self`; share between request handlers behind a mutex.
#[derive(Debug)]
pub struct SessionManager {
    sessions: HashMap<String, Session>,
    ttl: Duration,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    /// Create a session manager with the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL_SECS)
    }

    /// Create a session manager with a custom TTL in seconds.
    pub fn with_ttl(ttl_secs: u64) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// The durable reference a session keeps for an identity: its ID.
    pub fn serialize(&self, identity: &Identity) -> Uuid {
        identity.id
    }

    /// Establish a fresh session for a verified identity.
    pub fn establish(&mut self, identity: &Identity) -> Session {
        let session = Session::new(self.serialize(identity), self.ttl);
        self.sessions.insert(session.token.clone(), session.clone());
        info!(
            name = %identity.name,
            id = %identity.id,
            "session established"
        );
        session
    }

    /// Rehydrate the identity a token references.
    ///
    /// Fail-closed: an unknown token, an expired session, or a session whose
    /// identity no longer exists all yield `Ok(None)`, never a user-facing
    /// error. Dead entries are pruned on the way out. `Err` means the store
    /// itself malfunctioned.
    pub fn deserialize(
        &mut self,
        token: &str,
        store: &dyn IdentityStore,
    ) -> Result<Option<Identity>, StoreError> {
        let (expired, identity_id) = match self.sessions.get(token) {
            Some(session) => (session.is_expired(), session.identity_id),
            None => return Ok(None),
        };

        if expired {
            debug!(token = %token, "session expired");
            self.sessions.remove(token);
            return Ok(None);
        }

        match store.find_by_id(identity_id)? {
            Some(identity) => Ok(Some(identity)),
            None => {
                warn!(
                    token = %token,
                    identity_id = %identity_id,
                    "session references a missing identity; dropping it"
                );
                self.sessions.remove(token);
                Ok(None)
            }
        }
    }

    /// Destroy a session so the token stops resolving immediately.
    ///
    /// Idempotent: destroying an unknown or already-destroyed token is not
    /// an error.
    pub fn destroy(&mut self, token: &str) -> bool {
        match self.sessions.remove(token) {
            Some(session) => {
                info!(identity_id = %session.identity_id, "session destroyed");
                true
            }
            None => {
                debug!(token = %token, "destroy: session not found");
                false
            }
        }
    }

    /// Number of live entries in the registry.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
