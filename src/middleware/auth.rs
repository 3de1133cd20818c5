use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::user::SessionUser;

pub const SESSION_USER_KEY: &str = "user";
pub const LOGIN_PATH: &str = "/login";

/// The logged-in user, attached to the request by [`require_login`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

/// Lets the request through only when the session holds a user; otherwise
/// redirects to the login page without running the handler.
pub async fn require_login(session: Session, mut req: Request, next: Next) -> Response {
    match session.get::<SessionUser>(SESSION_USER_KEY).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        Ok(None) => Redirect::to(LOGIN_PATH).into_response(),
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read session, treating as logged out");
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}
