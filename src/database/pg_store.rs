use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::store::PortalStore;
use crate::error::{Error, Result};
use crate::models::mock_result::{MockResult, NewResult};
use crate::models::question::{Category, Question};
use crate::models::user::{NewUser, User};

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortalStore for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, email, password, username, created_at FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, username)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, username, created_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password)
        .bind(&new_user.username)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(Error::Conflict(format!("Email {} is already registered", new_user.email)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_topics(&self, category: Category) -> Result<Vec<String>> {
        let topics = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT topic FROM aptitude_questions WHERE category = $1 ORDER BY topic"#,
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(topics)
    }

    async fn question_ids_for_topic(&self, topic: &str) -> Result<Vec<i32>> {
        let ids = sqlx::query_scalar::<_, i32>(
            r#"SELECT id FROM aptitude_questions WHERE topic = $1"#,
        )
        .bind(topic)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    async fn questions_by_ids(&self, ids: &[i32]) -> Result<Vec<Question>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, category, topic, question_text, option_a, option_b, option_c, option_d,
                   correct_option, explanation
            FROM aptitude_questions
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, category, topic, question_text, option_a, option_b, option_c, option_d,
                   correct_option, explanation
            FROM aptitude_questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    async fn insert_result(&self, result: &NewResult) -> Result<MockResult> {
        let row = sqlx::query_as::<_, MockResult>(
            r#"
            INSERT INTO mock_results (user_id, score, total_questions, topic_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, score, total_questions, topic_name, test_date
            "#,
        )
        .bind(result.user_id)
        .bind(result.score)
        .bind(result.total_questions)
        .bind(&result.topic_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn results_for_user(&self, user_id: i32) -> Result<Vec<MockResult>> {
        let rows = sqlx::query_as::<_, MockResult>(
            r#"
            SELECT id, user_id, score, total_questions, topic_name, test_date
            FROM mock_results
            WHERE user_id = $1
            ORDER BY test_date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
