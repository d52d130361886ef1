//! Catalog endpoints
//!
//! Item names shown when picking what is being billed. The shop defaults
//! are seeded by migration; staff can add their own.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::{AppError, MetalType};
use crate::modules::catalog::models::{CatalogItem, CreateCatalogItemRequest};
use crate::modules::catalog::repositories::CatalogRepository;

/// List catalog entries for a metal
///
/// GET /catalog/{metal}
pub async fn list_by_metal(
    repository: web::Data<Arc<dyn CatalogRepository>>,
    metal: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let metal = MetalType::from_str(&metal).map_err(AppError::InvalidInput)?;
    let items = repository.list_by_metal(metal).await?;

    Ok(HttpResponse::Ok().json(items))
}

/// Add a catalog entry
///
/// POST /catalog
pub async fn create(
    repository: web::Data<Arc<dyn CatalogRepository>>,
    request: web::Json<CreateCatalogItemRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let item = CatalogItem::new(&request.name, request.metal_type)?;
    let created = repository.insert(&item).await?;

    tracing::info!(name = %created.name, metal = %created.metal_type, "Catalog item added");
    Ok(HttpResponse::Created().json(created))
}

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/catalog")
            .route("", web::post().to(create))
            .route("/{metal}", web::get().to(list_by_metal)),
    );
}
