/**
 * Session Cookie
 *
 * The session token travels only in the `auth-token` cookie. This module
 * reads it from inbound `Cookie` headers and builds the `Set-Cookie` values
 * used on login, registration, logout and account deletion.
 */

use axum::http::{header::COOKIE, HeaderMap};

use crate::backend::auth::sessions::TOKEN_TTL_SECS;

/// Name of the cookie holding the session token
pub const AUTH_COOKIE_NAME: &str = "auth-token";

/// Extract the session token from the request cookies
///
/// Returns `None` when the cookie is missing or empty. Headers and query
/// parameters other than `Cookie` are never consulted.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name.trim() == AUTH_COOKIE_NAME).then(|| value.trim())
        })
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

/// `Set-Cookie` value that stores a freshly issued token for 7 days
pub fn session_cookie(token: &str, secure: bool) -> String {
    build_cookie(token, TOKEN_TTL_SECS, secure)
}

/// `Set-Cookie` value that clears the session immediately
pub fn expired_cookie(secure: bool) -> String {
    build_cookie("", 0, secure)
}

fn build_cookie(value: &str, max_age: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE_NAME}={value}; Path=/; Max-Age={max_age}; HttpOnly; SameSite=Strict"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
