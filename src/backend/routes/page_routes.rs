/**
 * Page Routes
 *
 * Minimal HTML pages for the browser flow. The access guard decides who may
 * see them; the pages themselves only render a title and a pointer to the
 * matching API.
 */

use axum::{
    response::{Html, Redirect},
    routing::get,
    Router,
};

use crate::backend::middleware::guard::LOGIN_PATH;
use crate::backend::server::state::AppState;

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    ))
}

async fn login_page() -> Html<String> {
    page(
        "Login",
        "<p>Sign in with <code>POST /api/auth/login</code>.</p>\n<p><a href=\"/auth/register\">Create an account</a></p>",
    )
}

async fn register_page() -> Html<String> {
    page(
        "Register",
        "<p>Create an account with <code>POST /api/auth/register</code>.</p>\n<p><a href=\"/auth/login\">Already registered?</a></p>",
    )
}

async fn welcome_page() -> Html<String> {
    page(
        "Welcome",
        "<p>You are signed in.</p>\n<p><a href=\"/main/profile\">Your profile</a></p>",
    )
}

async fn profile_page() -> Html<String> {
    page(
        "Profile",
        "<p>Your profile is available at <code>GET /api/user/me</code>.</p>",
    )
}

/// Add the page routes to a router
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(|| async { Redirect::temporary(LOGIN_PATH) }))
        .route("/auth/login", get(login_page))
        .route("/auth/register", get(register_page))
        .route("/main/welcome", get(welcome_page))
        .route("/main/profile", get(profile_page))
}
