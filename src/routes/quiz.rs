use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Form,
};

use crate::dto::quiz_dto::QuizSubmission;
use crate::error::Result;
use crate::middleware::auth::CurrentUser;
use crate::models::question::Question;
use crate::services::grading_service::ReviewItem;
use crate::AppState;

#[derive(Template)]
#[template(path = "practice.html")]
pub struct PracticePage {
    pub username: String,
    pub topic: String,
    pub questions: Vec<Question>,
}

#[derive(Template)]
#[template(path = "no_data.html")]
pub struct NoDataPage {
    pub username: String,
    pub topic: String,
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage {
    pub username: String,
    pub topic: String,
    pub score: i32,
    pub total: i32,
    pub review: Vec<ReviewItem>,
}

/// `:topic` arrives percent-decoded from the router.
pub async fn practice(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(topic): Path<String>,
) -> Result<Response> {
    let questions = state.quiz_service.sample_questions(&topic).await?;
    if questions.is_empty() {
        return Ok(NoDataPage {
            username: user.username,
            topic,
        }
        .into_response());
    }

    Ok(PracticePage {
        username: user.username,
        topic,
        questions,
    }
    .into_response())
}

pub async fn submit_quiz(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<ResultPage> {
    let submission = QuizSubmission::from_pairs(pairs);
    let outcome = state.quiz_service.submit(user.id, &submission).await?;

    Ok(ResultPage {
        username: user.username,
        topic: outcome.result.topic_name.clone(),
        score: outcome.score(),
        total: outcome.total(),
        review: outcome.review,
    })
}
