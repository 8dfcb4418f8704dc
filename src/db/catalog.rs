use async_trait::async_trait;

use crate::db::{Barangay, DbError, Tree};

/// Read access to the barangay catalog.
///
/// Services take this (and [`TreeCatalog`]) as explicit dependencies so unit
/// tests can substitute an in-memory catalog for the Postgres repositories.
#[async_trait]
pub trait BarangayCatalog: Send + Sync {
    /// All barangays in stable catalog order.
    async fn list_barangays(&self) -> Result<Vec<Barangay>, DbError>;

    async fn get_barangay(&self, id: i32) -> Result<Option<Barangay>, DbError>;
}

/// Read access to the tree species catalog.
#[async_trait]
pub trait TreeCatalog: Send + Sync {
    /// All species in stable catalog order.
    async fn list_trees(&self) -> Result<Vec<Tree>, DbError>;
}
