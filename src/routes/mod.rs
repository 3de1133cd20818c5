pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod quiz;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_sessions::{SessionManagerLayer, SessionStore};

use crate::middleware::auth::require_login;
use crate::AppState;

/// All portal routes. Everything except login, registration, logout and
/// the health probe sits behind [`require_login`].
pub fn build_router<S>(state: AppState, session_layer: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    let protected = Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/aptitude-topics", get(catalog::aptitude_topics))
        .route("/reasoning-topics", get(catalog::reasoning_topics))
        .route("/practice/:topic", get(quiz::practice))
        .route("/submit-quiz", post(quiz::submit_quiz))
        .route_layer(from_fn(require_login));

    let public = Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", get(auth::logout).post(auth::logout))
        .route("/health", get(health::health));

    Router::new()
        .merge(protected)
        .merge(public)
        .with_state(state)
        .layer(session_layer)
}
