//! In-memory identity store.
//!
//! Reference implementation of [`IdentityStore`]: both lookup indexes live
//! behind a single `RwLock`, so an insert is atomic with respect to every
//! other insert and readers never observe a half-registered identity.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::identity::{Identity, NewIdentity};
use super::{IdentityStore, StoreError};

#[derive(Debug, Default)]
struct Indexes {
    by_id: HashMap<Uuid, Identity>,
    by_name: HashMap<String, Uuid>,
}

/// Identity store backed by process memory.
///
/// Records live for the lifetime of the store. Persistence beyond that is a
/// different [`IdentityStore`] implementation's concern.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    inner: RwLock<Indexes>,
}

impl MemoryIdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities.
    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(indexes) => indexes.by_id.len(),
            Err(poisoned) => poisoned.into_inner().by_id.len(),
        }
    }

    /// Whether the store holds no identities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn find_by_name(&self, name: &str) -> std::result::Result<Option<Identity>, StoreError> {
        let indexes = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        let identity = indexes
            .by_name
            .get(name)
            .and_then(|id| indexes.by_id.get(id))
            .cloned();
        Ok(identity)
    }

    fn find_by_id(&self, id: Uuid) -> std::result::Result<Option<Identity>, StoreError> {
        let indexes = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(indexes.by_id.get(&id).cloned())
    }

    fn insert(&self, new: NewIdentity) -> std::result::Result<Identity, StoreError> {
        let mut indexes = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;

        // The uniqueness check and the insert happen under one write lock;
        // a concurrent insert of the same name observes DuplicateName.
        if indexes.by_name.contains_key(&new.name) {
            return Err(StoreError::DuplicateName);
        }

        let identity = Identity {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };

        indexes.by_name.insert(identity.name.clone(), identity.id);
        indexes.by_id.insert(identity.id, identity.clone());

        debug!(name = %identity.name, id = %identity.id, "identity stored");
        Ok(identity)
    }
}
