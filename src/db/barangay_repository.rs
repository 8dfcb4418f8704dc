use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::db::{Barangay, BarangayCatalog, BarangayRow, DbError};

#[derive(Clone)]
pub struct BarangayRepository {
    pool: PgPool,
}

impl BarangayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BarangayCatalog for BarangayRepository {
    #[instrument(skip(self))]
    async fn list_barangays(&self) -> Result<Vec<Barangay>, DbError> {
        debug!("Querying all barangays");

        let rows = sqlx::query_as::<_, BarangayRow>(
            r#"
            SELECT id, name, latitude, longitude, population, flood_risk, urban_density
            FROM barangays
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} barangays", rows.len());
        rows.into_iter().map(Barangay::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn get_barangay(&self, id: i32) -> Result<Option<Barangay>, DbError> {
        debug!("Querying barangay {}", id);

        let row = sqlx::query_as::<_, BarangayRow>(
            r#"
            SELECT id, name, latitude, longitude, population, flood_risk, urban_density
            FROM barangays
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Barangay::try_from).transpose()
    }
}
