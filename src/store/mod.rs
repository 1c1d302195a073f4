//! Identity store for Arcade.
//!
//! The store maps identity IDs and login names to identity records and
//! enforces login-name uniqueness at insert time. Persistence is pluggable:
//! anything implementing [`IdentityStore`] can back the server, and
//! [`MemoryIdentityStore`] is the reference implementation.

mod identity;
mod memory;

pub use identity::{Identity, NewIdentity};
pub use memory::MemoryIdentityStore;

use thiserror::Error;
use uuid::Uuid;

/// Store-level errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The login name is already registered.
    #[error("username taken")]
    DuplicateName,

    /// The store itself malfunctioned.
    #[error("identity store failure: {0}")]
    Internal(String),
}

/// Lookup and insertion contract for identity persistence.
///
/// Name lookup is exact-match and case-sensitive: `Alice` and `alice` are
/// distinct identities. Implementations must make `insert` atomic with
/// respect to concurrent inserts of the same name: at most one may succeed.
pub trait IdentityStore: Send + Sync {
    /// Look up an identity by login name.
    fn find_by_name(&self, name: &str) -> Result<Option<Identity>, StoreError>;

    /// Look up an identity by ID.
    fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError>;

    /// Insert a new identity, failing with [`StoreError::DuplicateName`] if
    /// the name is already present.
    fn insert(&self, new: NewIdentity) -> Result<Identity, StoreError>;
}
