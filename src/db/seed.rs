use sqlx::PgPool;
use tracing::{info, instrument};

use crate::db::{DbError, GrowthTimeline};

/// Seed the sample Metro Manila catalog if both tables are empty.
///
/// The catalog is immutable after this; there are no update or delete paths.
#[instrument(skip(pool))]
pub async fn seed_if_empty(pool: &PgPool) -> Result<(), DbError> {
    let has_data = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM barangays) AND EXISTS (SELECT 1 FROM trees)",
    )
    .fetch_one(pool)
    .await?;

    if has_data {
        info!("Catalog already seeded, skipping");
        return Ok(());
    }

    info!("Seeding catalog data");
    let mut tx = pool.begin().await?;

    let barangays: [(&str, f64, f64, i32, &str, &str); 3] = [
        ("Barangay San Antonio, Pasig", 14.5826, 121.0620, 20000, "Low", "High"),
        ("Barangay Tumana, Marikina", 14.6543, 121.0962, 45000, "High", "High"),
        ("Barangay UP Campus, Quezon City", 14.6537, 121.0685, 35000, "Low", "Medium"),
    ];

    for (name, lat, lng, population, flood_risk, urban_density) in barangays {
        sqlx::query(
            r#"
            INSERT INTO barangays (name, latitude, longitude, population, flood_risk, urban_density)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(name)
        .bind(lat)
        .bind(lng)
        .bind(population)
        .bind(flood_risk)
        .bind(urban_density)
        .execute(&mut *tx)
        .await?;
    }

    let common_timeline = GrowthTimeline {
        seedling: "1-2 months".to_string(),
        juvenile: "1-3 years".to_string(),
        mature: "5+ years".to_string(),
    };
    let slow_timeline = GrowthTimeline {
        mature: "10+ years".to_string(),
        ..common_timeline.clone()
    };

    let trees: [(&str, &str, &str, &str, f64, bool, bool, &GrowthTimeline); 4] = [
        (
            "Banaba",
            "Lagerstroemia speciosa",
            "A deciduous tree known for its beautiful purple flowers.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5d/Lagerstroemia_speciosa_01.jpg/800px-Lagerstroemia_speciosa_01.jpg",
            12.0,
            true,
            true,
            &common_timeline,
        ),
        (
            "Narra",
            "Pterocarpus indicus",
            "The national tree of the Philippines, strong and durable.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c4/Starr_080601-6577_Terminalia_catappa.jpg/800px-Starr_080601-6577_Terminalia_catappa.jpg",
            25.0,
            true,
            false, // large roots
            &slow_timeline,
        ),
        (
            "Amaltas (Golden Shower)",
            "Cassia fistula",
            "Famous for its hanging yellow flowers.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6c/Cassia_fistula_-_Golden_Shower_Tree.jpg/800px-Cassia_fistula_-_Golden_Shower_Tree.jpg",
            10.0,
            false,
            true,
            &common_timeline,
        ),
        (
            "Talisay",
            "Terminalia catappa",
            "Known as Sea Almond, provides excellent shade.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c4/Starr_080601-6577_Terminalia_catappa.jpg/800px-Starr_080601-6577_Terminalia_catappa.jpg",
            20.0,
            true,
            true,
            &common_timeline,
        ),
    ];

    for (name, scientific_name, description, image_url, min_area_sqm, flood_resilient, urban_suitable, timeline) in trees {
        sqlx::query(
            r#"
            INSERT INTO trees (name, scientific_name, description, image_url,
                               min_area_sqm, flood_resilient, urban_suitable, growth_timeline)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(name)
        .bind(scientific_name)
        .bind(description)
        .bind(image_url)
        .bind(min_area_sqm)
        .bind(flood_resilient)
        .bind(urban_suitable)
        .bind(sqlx::types::Json(timeline))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!("Seeding complete");
    Ok(())
}
