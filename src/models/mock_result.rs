use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One completed quiz attempt, as stored in `mock_results`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MockResult {
    pub id: i32,
    pub user_id: i32,
    pub score: i32,
    pub total_questions: i32,
    pub topic_name: String,
    pub test_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResult {
    pub user_id: i32,
    pub score: i32,
    pub total_questions: i32,
    pub topic_name: String,
}
