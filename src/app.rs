// Application wiring shared by main and the HTTP tests

use std::sync::Arc;

use actix_web::web;
use sqlx::SqlitePool;

use crate::middleware::{json_error_handler, path_error_handler};
use crate::modules::billing::{BillService, SqliteLineItemRepository};
use crate::modules::catalog::{CatalogRepository, SqliteCatalogRepository};
use crate::modules::{billing, catalog, health, pricing};
use crate::modules::pricing::PriceCalculator;

/// Everything the handlers need, constructed once and injected
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub calculator: PriceCalculator,
    pub bill_service: Arc<BillService>,
    pub catalog_repo: Arc<dyn CatalogRepository>,
}

impl AppState {
    pub fn new(pool: SqlitePool, calculator: PriceCalculator) -> Self {
        let line_item_repo = Arc::new(SqliteLineItemRepository::new(pool.clone()));
        let catalog_repo: Arc<dyn CatalogRepository> =
            Arc::new(SqliteCatalogRepository::new(pool.clone()));

        Self {
            bill_service: Arc::new(BillService::new(line_item_repo, calculator)),
            calculator,
            catalog_repo,
            pool,
        }
    }

    /// Register shared data, extractor error handlers and all routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.pool.clone()))
            .app_data(web::Data::new(self.calculator))
            .app_data(web::Data::new(self.bill_service.clone()))
            .app_data(web::Data::new(self.catalog_repo.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .configure(health::controllers::configure)
            .configure(pricing::controllers::configure)
            .configure(billing::controllers::configure)
            .configure(catalog::controllers::configure);
    }
}
