use std::sync::Arc;

use crate::database::store::PortalStore;
use crate::error::Result;
use crate::models::question::Category;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn PortalStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn PortalStore>) -> Self {
        Self { store }
    }

    pub async fn topics(&self, category: Category) -> Result<Vec<String>> {
        let topics = self.store.list_topics(category).await?;
        tracing::debug!(%category, count = topics.len(), "Listed topics");
        Ok(topics)
    }
}
