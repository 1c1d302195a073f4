//! Arcade - a small credential-gated game lounge server.
//!
//! Credentials become verified identities, identities are persisted across
//! requests as server-side sessions, and route access is gated on session
//! state.

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod web;

pub use auth::{
    authenticate, hash_password, register, verify_password, AuthError, PasswordError,
    RegistrationError, RegistrationRequest, Session, SessionManager, ValidationError,
    DEFAULT_SESSION_TTL_SECS,
};
pub use config::Config;
pub use error::{ArcadeError, Result};
pub use store::{Identity, IdentityStore, MemoryIdentityStore, NewIdentity, StoreError};
