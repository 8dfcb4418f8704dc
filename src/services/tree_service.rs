use std::sync::Arc;

use crate::db::{DbError, Tree, TreeCatalog};

#[derive(Clone)]
pub struct TreeService {
    catalog: Arc<dyn TreeCatalog>,
}

impl TreeService {
    pub fn new(catalog: Arc<dyn TreeCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn list(&self) -> Result<Vec<Tree>, DbError> {
        self.catalog.list_trees().await
    }
}
