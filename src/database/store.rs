use async_trait::async_trait;

use crate::error::Result;
use crate::models::mock_result::{MockResult, NewResult};
use crate::models::question::{Category, Question};
use crate::models::user::{NewUser, User};

/// Every query the portal runs. `PgStore` is the production implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalStore: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Fails with `Error::Conflict` when the email is already registered.
    async fn create_user(&self, new_user: &NewUser) -> Result<User>;

    /// Distinct topics of a category, alphabetically.
    async fn list_topics(&self, category: Category) -> Result<Vec<String>>;

    async fn question_ids_for_topic(&self, topic: &str) -> Result<Vec<i32>>;

    async fn questions_by_ids(&self, ids: &[i32]) -> Result<Vec<Question>>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>>;

    async fn insert_result(&self, result: &NewResult) -> Result<MockResult>;

    /// Newest first.
    async fn results_for_user(&self, user_id: i32) -> Result<Vec<MockResult>>;
}
