use async_trait::async_trait;

use crate::db::{Barangay, BarangayCatalog, DbError, Tree, TreeCatalog};

/// In-process catalog backed by plain vectors.
///
/// Implements the same read traits as the Postgres repositories; used by
/// tests that need deterministic catalogs without a live database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    barangays: Vec<Barangay>,
    trees: Vec<Tree>,
}

impl InMemoryCatalog {
    pub fn new(barangays: Vec<Barangay>, trees: Vec<Tree>) -> Self {
        Self { barangays, trees }
    }
}

#[async_trait]
impl BarangayCatalog for InMemoryCatalog {
    async fn list_barangays(&self) -> Result<Vec<Barangay>, DbError> {
        Ok(self.barangays.clone())
    }

    async fn get_barangay(&self, id: i32) -> Result<Option<Barangay>, DbError> {
        Ok(self.barangays.iter().find(|b| b.id == id).cloned())
    }
}

#[async_trait]
impl TreeCatalog for InMemoryCatalog {
    async fn list_trees(&self) -> Result<Vec<Tree>, DbError> {
        Ok(self.trees.clone())
    }
}
