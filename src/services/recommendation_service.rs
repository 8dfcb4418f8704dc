use std::sync::Arc;

use serde::Serialize;

use crate::db::{Barangay, BarangayCatalog, DbError, FloodRisk, Tree, TreeCatalog, UrbanDensity};

/// Spacing heuristic: one planting slot per this many square meters,
/// independent of which species end up recommended.
pub const SQM_PER_TREE_SLOT: f64 = 15.0;

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("barangay {0} not found")]
    BarangayNotFound(i32),
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Planting restrictions derived from a barangay's classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub flood_prone: bool,
    pub urban: bool,
}

impl Constraints {
    pub fn for_barangay(barangay: &Barangay) -> Self {
        Self {
            flood_prone: matches!(barangay.flood_risk, FloodRisk::High | FloodRisk::Medium),
            urban: barangay.urban_density == UrbanDensity::High,
        }
    }
}

/// Classification labels echoed back alongside a recommendation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintLabels {
    pub flood_risk: FloodRisk,
    pub urban_density: UrbanDensity,
}

/// Per-request recommendation; built fresh, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended_trees: Vec<Tree>,
    pub max_trees: i64,
    pub barangay: Barangay,
    pub constraints: ConstraintLabels,
}

#[derive(Clone)]
pub struct RecommendationService {
    barangays: Arc<dyn BarangayCatalog>,
    trees: Arc<dyn TreeCatalog>,
}

impl RecommendationService {
    pub fn new(barangays: Arc<dyn BarangayCatalog>, trees: Arc<dyn TreeCatalog>) -> Self {
        Self { barangays, trees }
    }

    /// Recommend species for a plot in the given barangay.
    ///
    /// `land_area_sqm` must already be validated (> 0) by the boundary.
    /// An empty species catalog yields an empty recommendation list, not an
    /// error.
    pub async fn recommend(
        &self,
        barangay_id: i32,
        land_area_sqm: f64,
    ) -> Result<Recommendation, RecommendationError> {
        let barangay = self
            .barangays
            .get_barangay(barangay_id)
            .await?
            .ok_or(RecommendationError::BarangayNotFound(barangay_id))?;

        let constraints = Constraints::for_barangay(&barangay);
        let max_trees = estimate_capacity(land_area_sqm);

        let catalog = self.trees.list_trees().await?;
        let recommended_trees: Vec<Tree> = catalog
            .into_iter()
            .filter(|tree| tree_fits(tree, land_area_sqm, constraints))
            .collect();

        Ok(Recommendation {
            recommended_trees,
            max_trees,
            constraints: ConstraintLabels {
                flood_risk: barangay.flood_risk,
                urban_density: barangay.urban_density,
            },
            barangay,
        })
    }
}

/// Estimated planting slot count for a plot, always at least 1.
pub fn estimate_capacity(land_area_sqm: f64) -> i64 {
    let estimated = (land_area_sqm / SQM_PER_TREE_SLOT).floor() as i64;
    estimated.max(1)
}

/// A species passes when the plot fits one specimen and the species
/// tolerates whatever restrictions the barangay imposes.
fn tree_fits(tree: &Tree, land_area_sqm: f64, constraints: Constraints) -> bool {
    if land_area_sqm < tree.min_area_sqm {
        return false;
    }
    if constraints.flood_prone && !tree.flood_resilient {
        return false;
    }
    if constraints.urban && !tree.urban_suitable {
        return false;
    }
    true
}
