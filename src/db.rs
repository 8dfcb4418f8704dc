pub mod barangay_repository;
pub mod catalog;
pub mod error;
pub mod memory;
pub mod models;
pub mod seed;
pub mod tree_repository;

pub use barangay_repository::BarangayRepository;
pub use catalog::{BarangayCatalog, TreeCatalog};
pub use error::DbError;
pub use memory::InMemoryCatalog;
pub use models::*;
pub use tree_repository::TreeRepository;
