use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::db::{DbError, Tree, TreeCatalog, TreeRow};

#[derive(Clone)]
pub struct TreeRepository {
    pool: PgPool,
}

impl TreeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TreeCatalog for TreeRepository {
    #[instrument(skip(self))]
    async fn list_trees(&self) -> Result<Vec<Tree>, DbError> {
        debug!("Querying all trees");

        let rows = sqlx::query_as::<_, TreeRow>(
            r#"
            SELECT id, name, scientific_name, description, image_url,
                   min_area_sqm, flood_resilient, urban_suitable, growth_timeline
            FROM trees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} trees", rows.len());
        Ok(rows.into_iter().map(Tree::from).collect())
    }
}
