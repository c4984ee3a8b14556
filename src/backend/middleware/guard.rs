/**
 * Access Guard
 *
 * Routing middleware that keeps signed-in users away from the login and
 * register pages and keeps anonymous users out of `/main`.
 *
 * | path class | token valid? | action                      |
 * |------------|--------------|-----------------------------|
 * | public     | yes          | redirect to `/main/welcome` |
 * | public     | no           | allow                       |
 * | protected  | yes          | allow                       |
 * | protected  | no           | redirect to `/auth/login`   |
 * | unguarded  | any          | allow                       |
 *
 * The guard only routes. It never touches the store or the cookie, and
 * handlers behind it verify the session again themselves.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::backend::auth::cookies::extract_token;
use crate::backend::auth::sessions::TokenService;

/// Pages reserved for anonymous visitors
pub const PUBLIC_PATHS: &[&str] = &["/auth/login", "/auth/register"];

/// Prefix of pages that require a session
pub const PROTECTED_PREFIX: &str = "/main";

/// Where anonymous visitors are sent
pub const LOGIN_PATH: &str = "/auth/login";

/// Where signed-in visitors land
pub const LANDING_PATH: &str = "/main/welcome";

/// Access class of a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    Public,
    Protected,
    Unguarded,
}

/// Outcome of the guard for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// `path` is `prefix` itself or lies below it (`/main` matches `/main/x`,
/// not `/mainframe`)
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Classify a request path
pub fn classify(path: &str) -> PathClass {
    if PUBLIC_PATHS.iter().any(|public| is_under(path, public)) {
        PathClass::Public
    } else if is_under(path, PROTECTED_PREFIX) {
        PathClass::Protected
    } else {
        PathClass::Unguarded
    }
}

/// Apply the transition table
pub fn decide(class: PathClass, authenticated: bool) -> GuardDecision {
    match (class, authenticated) {
        (PathClass::Public, true) => GuardDecision::Redirect(LANDING_PATH),
        (PathClass::Protected, false) => GuardDecision::Redirect(LOGIN_PATH),
        _ => GuardDecision::Allow,
    }
}

/// Access guard middleware
///
/// Install with `axum::middleware::from_fn_with_state(app_state, access_guard)`.
pub async fn access_guard(
    State(tokens): State<Arc<TokenService>>,
    request: Request,
    next: Next,
) -> Response {
    let class = classify(request.uri().path());
    if class == PathClass::Unguarded {
        return next.run(request).await;
    }

    let authenticated = extract_token(request.headers())
        .and_then(|token| tokens.verify(&token))
        .is_some();

    match decide(class, authenticated) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(location) => {
            tracing::debug!(
                "Guard redirecting {} -> {}",
                request.uri().path(),
                location
            );
            Redirect::temporary(location).into_response()
        }
    }
}
