use askama::Template;
use axum::{extract::State, Extension};

use crate::error::Result;
use crate::middleware::auth::CurrentUser;
use crate::models::mock_result::MockResult;
use crate::AppState;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub username: String,
    pub results: Vec<MockResult>,
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<DashboardPage> {
    let results = state.result_service.history(user.id).await?;
    Ok(DashboardPage {
        username: user.username,
        results,
    })
}
