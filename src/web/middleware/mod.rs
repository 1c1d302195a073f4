//! Middleware for the Arcade web surface.

pub mod auth;

pub use auth::{inject_state, EntryRedirect, LoungeRedirect, RequireAnonymous, RequireIdentity};
