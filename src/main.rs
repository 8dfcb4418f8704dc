use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tree_planner_service::api::{create_router, AppState};
use tree_planner_service::config::Config;
use tree_planner_service::db::{seed, BarangayRepository, TreeRepository};
use tree_planner_service::services::{
    BarangayService, LinearScanNearest, RecommendationService, TreeService,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tree_planner_service=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting tree planner service with config: {:?}", config);

    // Create database connection pool
    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations completed");

    // Seed the catalog on first start
    seed::seed_if_empty(&pool).await?;

    // Create repositories
    let barangay_repo = Arc::new(BarangayRepository::new(pool.clone()));
    let tree_repo = Arc::new(TreeRepository::new(pool.clone()));

    // Create services
    let barangay_service =
        BarangayService::new(barangay_repo.clone(), Arc::new(LinearScanNearest));
    let tree_service = TreeService::new(tree_repo.clone());
    let recommendation_service = RecommendationService::new(barangay_repo, tree_repo);

    // Create API router
    let app_state = AppState {
        barangay_service,
        tree_service,
        recommendation_service,
    };
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
