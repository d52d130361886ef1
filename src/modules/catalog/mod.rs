// Catalog module: item name suggestions per metal

pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::CatalogItem;
pub use repositories::{CatalogRepository, SqliteCatalogRepository};
