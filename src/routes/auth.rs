use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;
use validator::Validate;

use crate::dto::auth_dto::{LoginForm, RegisterForm};
use crate::error::{Error, Result};
use crate::middleware::auth::{LOGIN_PATH, SESSION_USER_KEY};
use crate::services::auth_service::INVALID_CREDENTIALS;
use crate::AppState;

#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub email: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Template, Default)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub username: String,
    pub email: String,
    pub error: Option<String>,
}

pub async fn login_page() -> LoginPage {
    LoginPage::default()
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state
        .auth_service
        .authenticate(&form.email, &form.password)
        .await?
    {
        Some(user) => {
            session.cycle_id().await?;
            session.insert(SESSION_USER_KEY, &user).await?;
            Ok(Redirect::to("/").into_response())
        }
        None => Ok(LoginPage {
            email: form.email,
            error: Some(INVALID_CREDENTIALS.to_string()),
            notice: None,
        }
        .into_response()),
    }
}

pub async fn register_page() -> RegisterPage {
    RegisterPage::default()
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        return Ok(RegisterPage {
            error: Some(RegisterForm::first_error(&errors)),
            username: form.username,
            email: form.email,
        }
        .into_response());
    }

    match state.auth_service.register(&form).await {
        Ok(_) => Ok(LoginPage {
            email: form.email.trim().to_string(),
            error: None,
            notice: Some("Account created. Please log in.".to_string()),
        }
        .into_response()),
        Err(Error::Conflict(_)) => Ok(RegisterPage {
            error: Some("An account with this email already exists".to_string()),
            username: form.username,
            email: form.email,
        }
        .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn logout(session: Session) -> Result<Redirect> {
    session.flush().await?;
    Ok(Redirect::to(LOGIN_PATH))
}
