//! Authentication guards.
//!
//! Two complementary extractors gate routes on session state. Both fail
//! closed: a missing, expired, or dangling session counts as anonymous.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::store::Identity;
use crate::web::handlers::AppState;

/// Rejection that sends the client to the entry page.
#[derive(Debug)]
pub struct EntryRedirect;

impl IntoResponse for EntryRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/").into_response()
    }
}

/// Rejection that sends the client to the lounge.
#[derive(Debug)]
pub struct LoungeRedirect;

impl IntoResponse for LoungeRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/games").into_response()
    }
}

/// Resolve the identity behind the request's session cookie, if any.
///
/// Store failures during rehydration are logged and treated as anonymous.
pub(crate) async fn current_identity(state: &AppState, headers: &HeaderMap) -> Option<Identity> {
    let jar = CookieJar::from_headers(headers);
    let token = jar.get(&state.session_cookie)?.value().to_string();

    let mut sessions = state.sessions.lock().await;
    match sessions.deserialize(&token, state.store.as_ref()) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(error = %e, "session rehydration failed; treating as anonymous");
            None
        }
    }
}

/// Extractor for routes that require an authenticated identity.
///
/// The handler receives the rehydrated identity; anonymous requests are
/// redirected to the entry page.
#[derive(Debug, Clone)]
pub struct RequireIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequireIdentity
where
    S: Send + Sync,
{
    type Rejection = EntryRedirect;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let state = match parts.extensions.get::<Arc<AppState>>() {
                Some(state) => state.clone(),
                None => {
                    tracing::error!("application state not configured on request");
                    return Err(EntryRedirect);
                }
            };

            match current_identity(&state, &parts.headers).await {
                Some(identity) => Ok(RequireIdentity(identity)),
                None => Err(EntryRedirect),
            }
        })
    }
}

/// Extractor for routes reserved for anonymous clients.
///
/// A request that already carries a valid session is redirected to the
/// lounge instead.
#[derive(Debug, Clone)]
pub struct RequireAnonymous;

impl<S> FromRequestParts<S> for RequireAnonymous
where
    S: Send + Sync,
{
    type Rejection = LoungeRedirect;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let state = match parts.extensions.get::<Arc<AppState>>() {
                Some(state) => state.clone(),
                None => {
                    tracing::error!("application state not configured on request");
                    return Ok(RequireAnonymous);
                }
            };

            match current_identity(&state, &parts.headers).await {
                Some(_) => Err(LoungeRedirect),
                None => Ok(RequireAnonymous),
            }
        })
    }
}

/// Middleware that makes the application state visible to the guards.
pub async fn inject_state(
    state: Arc<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(state);
    next.run(request).await
}
