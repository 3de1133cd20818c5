use askama::Template;
use axum::{extract::State, Extension};

use crate::error::Result;
use crate::middleware::auth::CurrentUser;
use crate::models::question::Category;
use crate::AppState;

#[derive(Template)]
#[template(path = "topics.html")]
pub struct TopicsPage {
    pub username: String,
    pub title: &'static str,
    pub topics: Vec<String>,
}

async fn render_topics(state: &AppState, user: &CurrentUser, category: Category) -> Result<TopicsPage> {
    let topics = state.catalog_service.topics(category).await?;
    Ok(TopicsPage {
        username: user.0.username.clone(),
        title: category.menu_title(),
        topics,
    })
}

pub async fn aptitude_topics(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<TopicsPage> {
    render_topics(&state, &user, Category::Quantitative).await
}

pub async fn reasoning_topics(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<TopicsPage> {
    render_topics(&state, &user, Category::Logical).await
}
