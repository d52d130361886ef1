// Price breakdown for a single piece of jewellery
//
// A breakdown keeps every intermediate figure so the counter can show how
// the price was reached: raw weight, wastage, weight charged, metal cost,
// making charge and the final price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{format_money, format_weight};
use crate::core::MetalType;

/// Inputs to the pricing formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceInput {
    /// Weight of one piece in grams
    pub weight: Decimal,
    /// Number of identical pieces
    pub quantity: i32,
    /// Price per gram of the metal
    pub rate: Decimal,
    /// Flat fee added after the metal cost
    pub making_charge: Decimal,
}

/// Result of pricing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// weight × quantity
    pub total_weight: Decimal,
    /// total_weight × wastage rate
    pub wastage: Decimal,
    /// total_weight + wastage
    pub final_weight: Decimal,
    /// final_weight × rate
    pub metal_cost: Decimal,
    pub making_charge: Decimal,
    /// metal_cost + making_charge
    pub total_price: Decimal,
}

/// Request body for POST /pricing/quote
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub weight: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub making_charge: Decimal,
    pub rate: Decimal,
    /// Informational only; echoed back in the response
    #[serde(default)]
    pub metal_type: Option<MetalType>,
}

pub(crate) fn default_quantity() -> i32 {
    1
}

impl QuoteRequest {
    pub fn to_input(&self) -> PriceInput {
        PriceInput {
            weight: self.weight,
            quantity: self.quantity,
            rate: self.rate,
            making_charge: self.making_charge,
        }
    }
}

/// Response body for a quote, amounts rendered for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub metal_type: Option<MetalType>,
    pub weight: String,
    pub quantity: i32,
    pub rate: String,
    pub wastage_rate: String,
    pub total_weight: String,
    pub wastage: String,
    pub final_weight: String,
    pub metal_cost: String,
    pub making_charge: String,
    pub total_price: String,
}

impl QuoteResponse {
    pub fn new(
        request: &QuoteRequest,
        wastage_rate: Decimal,
        breakdown: &PriceBreakdown,
    ) -> Self {
        Self {
            metal_type: request.metal_type,
            weight: format_weight(request.weight),
            quantity: request.quantity,
            rate: format_money(request.rate),
            wastage_rate: wastage_rate.normalize().to_string(),
            total_weight: format_weight(breakdown.total_weight),
            wastage: format_weight(breakdown.wastage),
            final_weight: format_weight(breakdown.final_weight),
            metal_cost: format_money(breakdown.metal_cost),
            making_charge: format_money(breakdown.making_charge),
            total_price: format_money(breakdown.total_price),
        }
    }
}
