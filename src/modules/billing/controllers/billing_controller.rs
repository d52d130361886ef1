use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::error::AppError;
use crate::modules::billing::models::{
    BillSummaryResponse, LineItemResponse, MetalRates, MetalRatesResponse, NewLineItem,
};
use crate::modules::billing::services::BillService;

/// Response for DELETE /bill
#[derive(Debug, Serialize)]
pub struct ClearBillResponse {
    pub removed_items: u64,
}

/// Set the rates for the current bill
/// PUT /bill/rates
pub async fn set_rates(
    service: web::Data<Arc<BillService>>,
    request: web::Json<MetalRates>,
) -> Result<HttpResponse, AppError> {
    let rates = service.set_rates(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MetalRatesResponse::from(&rates)))
}

/// Get the rates of the current bill
/// GET /bill/rates
pub async fn get_rates(service: web::Data<Arc<BillService>>) -> Result<HttpResponse, AppError> {
    let rates = service
        .rates()
        .await
        .ok_or_else(|| AppError::not_found("Metal rates have not been set"))?;

    Ok(HttpResponse::Ok().json(MetalRatesResponse::from(&rates)))
}

/// List items on the current bill
/// GET /bill/items
pub async fn list_items(service: web::Data<Arc<BillService>>) -> Result<HttpResponse, AppError> {
    let items = service.items().await?;
    let response: Vec<LineItemResponse> = items.iter().map(LineItemResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// Add an item to the current bill
/// POST /bill/items
pub async fn add_item(
    service: web::Data<Arc<BillService>>,
    request: web::Json<NewLineItem>,
) -> Result<HttpResponse, AppError> {
    let item = service.add(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(LineItemResponse::from(&item)))
}

/// Get one item
/// GET /bill/items/{id}
pub async fn get_item(
    service: web::Data<Arc<BillService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let item = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LineItemResponse::from(&item)))
}

/// Remove an item from the current bill
/// DELETE /bill/items/{id}
pub async fn remove_item(
    service: web::Data<Arc<BillService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.remove(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Generate the bill summary
/// GET /bill/summary
pub async fn summary(service: web::Data<Arc<BillService>>) -> Result<HttpResponse, AppError> {
    let summary = service.summarize().await?;
    Ok(HttpResponse::Ok().json(BillSummaryResponse::from(&summary)))
}

/// Start a new bill
/// DELETE /bill
pub async fn clear_bill(service: web::Data<Arc<BillService>>) -> Result<HttpResponse, AppError> {
    let removed_items = service.clear().await?;
    Ok(HttpResponse::Ok().json(ClearBillResponse { removed_items }))
}

/// Configure billing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bill")
            .route("", web::delete().to(clear_bill))
            .route("/rates", web::put().to(set_rates))
            .route("/rates", web::get().to(get_rates))
            .route("/items", web::get().to(list_items))
            .route("/items", web::post().to(add_item))
            .route("/items/{id}", web::get().to(get_item))
            .route("/items/{id}", web::delete().to(remove_item))
            .route("/summary", web::get().to(summary)),
    );
}
