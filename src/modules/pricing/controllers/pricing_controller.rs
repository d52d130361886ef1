use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::pricing::models::{QuoteRequest, QuoteResponse};
use crate::modules::pricing::services::PriceCalculator;

/// Price a single piece without touching the bill
/// POST /pricing/quote
pub async fn quote(
    calculator: web::Data<PriceCalculator>,
    request: web::Json<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let breakdown = calculator.calculate(&request.to_input())?;

    tracing::debug!(
        metal = ?request.metal_type,
        total_price = %breakdown.total_price,
        "Quoted price"
    );

    Ok(HttpResponse::Ok().json(QuoteResponse::new(
        &request,
        calculator.wastage_rate(),
        &breakdown,
    )))
}

/// Configure pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/pricing").route("/quote", web::post().to(quote)));
}
