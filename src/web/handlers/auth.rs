//! Authentication handlers: login, registration, logout.

use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::{authenticate, register, AuthError, RegistrationError, RegistrationRequest};
use crate::web::error::WebError;
use crate::web::flash::set_flash;
use crate::web::middleware::RequireAnonymous;

use super::AppState;

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Login name.
    pub name: String,
    /// Password.
    pub password: String,
}

/// Registration form fields.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    /// Desired login name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Build the session cookie handed to the client.
fn session_cookie(name: &str, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name.to_string(), token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// POST /login - verify credentials and establish a session.
pub async fn login(
    State(state): State<Arc<AppState>>,
    _guard: RequireAnonymous,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), WebError> {
    // Argon2 verification is CPU-bound; keep it off the request dispatcher
    let store = state.store.clone();
    let outcome =
        tokio::task::spawn_blocking(move || authenticate(store.as_ref(), &form.name, &form.password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "login task panicked");
                WebError::internal("login failed")
            })?;

    match outcome {
        Ok(identity) => {
            let session = state.sessions.lock().await.establish(&identity);
            let jar = jar.add(session_cookie(&state.session_cookie, session.token));
            Ok((jar, Redirect::to("/games")))
        }
        Err(AuthError::Internal(e)) => {
            tracing::error!(error = %e, "login failed");
            Err(WebError::internal("login failed"))
        }
        // UnknownUser / BadCredential: recoverable, back to the entry form
        Err(expected) => Ok((set_flash(jar, &expected.to_string()), Redirect::to("/"))),
    }
}

/// POST /register - create a new identity.
pub async fn register_identity(
    State(state): State<Arc<AppState>>,
    _guard: RequireAnonymous,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<(CookieJar, Redirect), WebError> {
    let store = state.store.clone();
    let hasher = state.hasher.clone();
    let request = RegistrationRequest::new(form.name, form.email, form.password);

    let outcome = tokio::task::spawn_blocking(move || register(store.as_ref(), &hasher, request))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "registration task panicked");
            WebError::internal("registration failed")
        })?;

    match outcome {
        Ok(_) => Ok((
            set_flash(jar, "Registration complete. Please log in."),
            Redirect::to("/"),
        )),
        Err(e @ (RegistrationError::DuplicateName | RegistrationError::Validation(_))) => {
            Ok((set_flash(jar, &e.to_string()), Redirect::to("/")))
        }
        Err(e) => {
            tracing::error!(error = %e, "registration failed");
            Err(WebError::internal("registration failed"))
        }
    }
}

/// DELETE /logout - destroy the current session.
///
/// Always redirects to the entry page; logging out without a live session
/// is not an error.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(&state.session_cookie) {
        let token = cookie.value().to_string();
        state.sessions.lock().await.destroy(&token);
    }

    let jar = jar.remove(session_cookie(&state.session_cookie, String::new()));
    (jar, Redirect::to("/"))
}
