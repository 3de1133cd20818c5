use std::sync::Arc;

use crate::database::store::PortalStore;
use crate::error::Result;
use crate::models::mock_result::MockResult;

#[derive(Clone)]
pub struct ResultService {
    store: Arc<dyn PortalStore>,
}

impl ResultService {
    pub fn new(store: Arc<dyn PortalStore>) -> Self {
        Self { store }
    }

    pub async fn history(&self, user_id: i32) -> Result<Vec<MockResult>> {
        self.store.results_for_user(user_id).await
    }
}
