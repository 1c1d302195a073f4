//! Request handlers for the Arcade web surface.

pub mod auth;
pub mod pages;

pub use auth::*;
pub use pages::*;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::auth::SessionManager;
use crate::config::{HasherConfig, SessionConfig};
use crate::store::IdentityStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Identity store.
    pub store: Arc<dyn IdentityStore>,
    /// Session registry (wrapped in a mutex for shared mutation).
    pub sessions: Arc<Mutex<SessionManager>>,
    /// Password hasher cost settings.
    pub hasher: HasherConfig,
    /// Name of the session cookie.
    pub session_cookie: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        store: Arc<dyn IdentityStore>,
        session_config: &SessionConfig,
        hasher: HasherConfig,
    ) -> Self {
        Self {
            store,
            sessions: Arc::new(Mutex::new(SessionManager::with_ttl(session_config.ttl_secs))),
            hasher,
            session_cookie: session_config.cookie_name.clone(),
        }
    }
}
