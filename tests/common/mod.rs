//! Test helpers for web integration tests.

use std::sync::Arc;

use axum_test::TestServer;

use arcade::config::{Config, HasherConfig};
use arcade::web::handlers::AppState;
use arcade::web::router::{create_health_router, create_router};
use arcade::MemoryIdentityStore;

/// Create a test configuration with cheap hashing so the suite stays fast.
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.port = 0;
    config.hasher = HasherConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    };
    config
}

/// Create a test server over a fresh in-memory identity store.
///
/// The server keeps cookies between requests, acting as one browser.
pub fn create_test_server() -> (TestServer, Arc<MemoryIdentityStore>) {
    let config = create_test_config();
    let store = Arc::new(MemoryIdentityStore::new());

    let app_state = Arc::new(AppState::new(
        store.clone(),
        &config.session,
        config.hasher.clone(),
    ));

    let router = create_router(app_state).merge(create_health_router());

    let mut server = TestServer::new(router).expect("Failed to create test server");
    server.do_save_cookies();

    (server, store)
}

/// Register an identity through the web surface.
pub async fn register_identity(server: &TestServer, name: &str, email: &str, password: &str) {
    server
        .post("/register")
        .form(&[("name", name), ("email", email), ("password", password)])
        .await;
}

/// Log in through the web surface.
pub async fn login(server: &TestServer, name: &str, password: &str) -> axum_test::TestResponse {
    server
        .post("/login")
        .form(&[("name", name), ("password", password)])
        .await
}
