//! Web authentication flow tests.
//!
//! Drives the login, registration, logout and access-guard flows through
//! the full router, cookies included.

use axum::http::StatusCode;

use arcade::IdentityStore;

mod common;

use common::{create_test_server, login, register_identity};

fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("location header")
        .to_string()
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_success() {
    let (server, store) = create_test_server();

    let response = server
        .post("/register")
        .form(&[
            ("name", "alice"),
            ("email", "a@x.com"),
            ("password", "secret1"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let stored = store.find_by_name("alice").unwrap().expect("alice stored");
    assert_eq!(stored.email, "a@x.com");
    assert_ne!(stored.password_hash, "secret1");

    // The flash shows up on the entry page, once
    let page = server.get("/").await;
    assert!(page.text().contains("Registration complete. Please log in."));

    let page = server.get("/").await;
    assert!(!page.text().contains("Registration complete"));
}

#[tokio::test]
async fn test_register_duplicate_name() {
    let (server, store) = create_test_server();

    register_identity(&server, "alice", "a@x.com", "secret1").await;
    let response = server
        .post("/register")
        .form(&[
            ("name", "alice"),
            ("email", "b@x.com"),
            ("password", "other-password"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(store.len(), 1);

    let page = server.get("/").await;
    assert!(page.text().contains("username taken"));
}

#[tokio::test]
async fn test_register_invalid_fields() {
    let (server, store) = create_test_server();

    let response = server
        .post("/register")
        .form(&[
            ("name", "ab"),
            ("email", "a@x.com"),
            ("password", "secret1"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(store.is_empty());

    let page = server.get("/").await;
    assert!(page.text().contains("name must be at least"));
}

#[tokio::test]
async fn test_register_rejected_while_logged_in() {
    let (server, store) = create_test_server();

    register_identity(&server, "alice", "a@x.com", "secret1").await;
    login(&server, "alice", "secret1").await;

    let response = server
        .post("/register")
        .form(&[
            ("name", "bob"),
            ("email", "b@x.com"),
            ("password", "secret2"),
        ])
        .await;

    // Already authenticated: bounced to the lounge, nothing registered
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/games");
    assert_eq!(store.len(), 1);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let (server, _store) = create_test_server();

    register_identity(&server, "alice", "a@x.com", "secret1").await;
    let response = login(&server, "alice", "secret1").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/games");

    // The very next request on this session is authenticated
    let page = server.get("/games").await;
    page.assert_status_ok();
    assert!(page.text().contains("alice"));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (server, _store) = create_test_server();

    let response = login(&server, "nobody", "secret1").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let page = server.get("/").await;
    assert!(page.text().contains("no user found with that name"));

    // No session was established
    let games = server.get("/games").await;
    games.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&games), "/");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _store) = create_test_server();

    register_identity(&server, "alice", "a@x.com", "secret1").await;
    let response = login(&server, "alice", "wrong").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let page = server.get("/").await;
    assert!(page.text().contains("password incorrect"));

    let games = server.get("/games").await;
    games.assert_status(StatusCode::SEE_OTHER);
}

// ============================================================================
// Access guards
// ============================================================================

#[tokio::test]
async fn test_games_requires_authentication() {
    let (server, _store) = create_test_server();

    let response = server.get("/games").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_entry_redirects_when_authenticated() {
    let (server, _store) = create_test_server();

    register_identity(&server, "alice", "a@x.com", "secret1").await;
    login(&server, "alice", "secret1").await;

    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/games");
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_destroys_session() {
    let (server, _store) = create_test_server();

    register_identity(&server, "alice", "a@x.com", "secret1").await;
    login(&server, "alice", "secret1").await;
    server.get("/games").await.assert_status_ok();

    let response = server.delete("/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    // Immediately after logout the session is gone
    let games = server.get("/games").await;
    games.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&games), "/");
}

#[tokio::test]
async fn test_logout_without_session() {
    let (server, _store) = create_test_server();

    let response = server.delete("/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

// ============================================================================
// Misc
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (server, _store) = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_end_to_end() {
    let (server, _store) = create_test_server();

    // Register alice
    let response = server
        .post("/register")
        .form(&[
            ("name", "alice"),
            ("email", "a@x.com"),
            ("password", "secret1"),
        ])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    // Wrong password: back to the entry page, no session
    let response = login(&server, "alice", "wrong").await;
    assert_eq!(location(&response), "/");
    let games = server.get("/games").await;
    games.assert_status(StatusCode::SEE_OTHER);

    // Correct password: session established, lounge greets alice
    let response = login(&server, "alice", "secret1").await;
    assert_eq!(location(&response), "/games");
    let games = server.get("/games").await;
    games.assert_status_ok();
    assert!(games.text().contains("alice"));

    // Logout: next lounge request bounces to the entry page
    server.delete("/logout").await;
    let games = server.get("/games").await;
    games.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&games), "/");
}
