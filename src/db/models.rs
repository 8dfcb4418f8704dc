use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::DbError;

/// Flood exposure classification of a barangay.
///
/// Persisted as TEXT; decoding goes through [`FloodRisk::from_label`] so an
/// unknown label surfaces as a `DbError` instead of a silently wrong value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloodRisk {
    Low,
    Medium,
    High,
}

impl FloodRisk {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(FloodRisk::Low),
            "Medium" => Some(FloodRisk::Medium),
            "High" => Some(FloodRisk::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FloodRisk::Low => "Low",
            FloodRisk::Medium => "Medium",
            FloodRisk::High => "High",
        }
    }
}

/// Settlement density classification of a barangay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrbanDensity {
    Low,
    Medium,
    High,
}

impl UrbanDensity {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(UrbanDensity::Low),
            "Medium" => Some(UrbanDensity::Medium),
            "High" => Some(UrbanDensity::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UrbanDensity::Low => "Low",
            UrbanDensity::Medium => "Medium",
            UrbanDensity::High => "High",
        }
    }
}

/// Administrative area record. Seeded once, immutable thereafter.
///
/// Coordinates are degrees treated as planar; see the nearest-lookup strategy
/// for the distance approximation this implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barangay {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i32,
    pub flood_risk: FloodRisk,
    pub urban_density: UrbanDensity,
}

/// Raw barangay row; classifications validated when converting to [`Barangay`].
#[derive(Debug, FromRow)]
pub struct BarangayRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i32,
    pub flood_risk: String,
    pub urban_density: String,
}

impl TryFrom<BarangayRow> for Barangay {
    type Error = DbError;

    fn try_from(row: BarangayRow) -> Result<Self, DbError> {
        let flood_risk = FloodRisk::from_label(&row.flood_risk).ok_or_else(|| {
            DbError::InvalidClassification {
                field: "flood_risk",
                id: row.id,
                value: row.flood_risk.clone(),
            }
        })?;
        let urban_density = UrbanDensity::from_label(&row.urban_density).ok_or_else(|| {
            DbError::InvalidClassification {
                field: "urban_density",
                id: row.id,
                value: row.urban_density.clone(),
            }
        })?;

        Ok(Barangay {
            id: row.id,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            population: row.population,
            flood_risk,
            urban_density,
        })
    }
}

/// Free-text growth stage durations for a species (persisted as JSONB).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthTimeline {
    pub seedling: String,
    pub juvenile: String,
    pub mature: String,
}

/// Plantable species record. Seeded once, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub id: i32,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_url: String,
    /// Minimum land footprint a single specimen requires, in square meters.
    pub min_area_sqm: f64,
    pub flood_resilient: bool,
    pub urban_suitable: bool,
    pub growth_timeline: GrowthTimeline,
}

#[derive(Debug, FromRow)]
pub struct TreeRow {
    pub id: i32,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_url: String,
    pub min_area_sqm: f64,
    pub flood_resilient: bool,
    pub urban_suitable: bool,
    pub growth_timeline: sqlx::types::Json<GrowthTimeline>,
}

impl From<TreeRow> for Tree {
    fn from(row: TreeRow) -> Self {
        Tree {
            id: row.id,
            name: row.name,
            scientific_name: row.scientific_name,
            description: row.description,
            image_url: row.image_url,
            min_area_sqm: row.min_area_sqm,
            flood_resilient: row.flood_resilient,
            urban_suitable: row.urban_suitable,
            growth_timeline: row.growth_timeline.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_labels_round_trip() {
        for risk in [FloodRisk::Low, FloodRisk::Medium, FloodRisk::High] {
            assert_eq!(FloodRisk::from_label(risk.label()), Some(risk));
        }
        for density in [UrbanDensity::Low, UrbanDensity::Medium, UrbanDensity::High] {
            assert_eq!(UrbanDensity::from_label(density.label()), Some(density));
        }
    }

    #[test]
    fn unknown_classification_is_rejected() {
        assert_eq!(FloodRisk::from_label("Severe"), None);
        assert_eq!(UrbanDensity::from_label("high"), None);

        let row = BarangayRow {
            id: 7,
            name: "Barangay Test".to_string(),
            latitude: 14.6,
            longitude: 121.0,
            population: 1000,
            flood_risk: "Severe".to_string(),
            urban_density: "High".to_string(),
        };
        let err = Barangay::try_from(row).unwrap_err();
        assert!(matches!(
            err,
            DbError::InvalidClassification { field: "flood_risk", id: 7, .. }
        ));
    }

    #[test]
    fn barangay_serializes_camel_case() {
        let barangay = Barangay {
            id: 1,
            name: "Barangay San Antonio, Pasig".to_string(),
            latitude: 14.5826,
            longitude: 121.0620,
            population: 20000,
            flood_risk: FloodRisk::Low,
            urban_density: UrbanDensity::High,
        };
        let json = serde_json::to_value(&barangay).unwrap();
        assert_eq!(json["floodRisk"], "Low");
        assert_eq!(json["urbanDensity"], "High");
        assert_eq!(json["latitude"], 14.5826);
    }
}
