pub mod barangay_service;
pub mod nearest;
pub mod recommendation_service;
pub mod tree_service;

pub use barangay_service::BarangayService;
pub use nearest::{LinearScanNearest, NearestStrategy};
pub use recommendation_service::{RecommendationError, RecommendationService};
pub use tree_service::TreeService;
