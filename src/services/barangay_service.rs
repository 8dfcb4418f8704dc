use std::sync::Arc;

use crate::db::{Barangay, BarangayCatalog, DbError};
use crate::services::NearestStrategy;

#[derive(Clone)]
pub struct BarangayService {
    catalog: Arc<dyn BarangayCatalog>,
    nearest: Arc<dyn NearestStrategy>,
}

impl BarangayService {
    pub fn new(catalog: Arc<dyn BarangayCatalog>, nearest: Arc<dyn NearestStrategy>) -> Self {
        Self { catalog, nearest }
    }

    pub async fn list(&self) -> Result<Vec<Barangay>, DbError> {
        self.catalog.list_barangays().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Barangay>, DbError> {
        self.catalog.get_barangay(id).await
    }

    /// Nearest barangay to the query point over a snapshot of the catalog.
    ///
    /// `None` means the catalog is empty. Caller must ensure the coordinates
    /// are finite; the boundary rejects non-numeric input before this runs.
    pub async fn find_nearest(&self, lat: f64, lng: f64) -> Result<Option<Barangay>, DbError> {
        let barangays = self.catalog.list_barangays().await?;
        Ok(self.nearest.nearest(&barangays, lat, lng).cloned())
    }
}
