use std::sync::Arc;

use crate::database::store::PortalStore;
use crate::dto::auth_dto::RegisterForm;
use crate::error::Result;
use crate::models::user::{NewUser, SessionUser, User};
use crate::utils::crypto::{hash_password, password_matches};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn PortalStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn PortalStore>) -> Self {
        Self { store }
    }

    /// `None` covers both an unknown email and a wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<SessionUser>> {
        let Some(user) = self.store.find_user_by_email(email).await? else {
            tracing::info!(email, "Login rejected");
            return Ok(None);
        };

        if password_matches(password, &user.password) {
            tracing::info!(user_id = user.id, "Login succeeded");
            Ok(Some(SessionUser::from(user)))
        } else {
            tracing::info!(email, "Login rejected");
            Ok(None)
        }
    }

    /// Stores an argon2 hash, never the plaintext.
    pub async fn register(&self, form: &RegisterForm) -> Result<User> {
        let new_user = NewUser {
            email: form.email.trim().to_string(),
            password: hash_password(&form.password)?,
            username: form.username.trim().to_string(),
        };
        let user = self.store.create_user(&new_user).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }
}
