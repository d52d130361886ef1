// A priced piece on the running bill
//
// A line item is priced once, when it is added, against the rate of its
// metal. The derived weights and price are stored alongside the inputs
// and never recomputed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{format_money, format_weight};
use crate::core::{AppError, MetalType, Result};
use crate::modules::pricing::models::PriceInput;
use crate::modules::pricing::PriceCalculator;

const MAX_NAME_LEN: usize = 255;

/// Request body for adding a piece to the bill
#[derive(Debug, Clone, Deserialize)]
pub struct NewLineItem {
    pub name: String,
    pub weight: Decimal,
    #[serde(default = "crate::modules::pricing::models::default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub making_charge: Decimal,
    pub metal_type: MetalType,
}

/// Represents a single priced line on the bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Generated by the store; `None` until inserted
    pub id: Option<i64>,
    pub name: String,
    /// Weight of one piece in grams
    pub weight: Decimal,
    pub quantity: i32,
    pub making_charge: Decimal,
    pub metal_type: MetalType,
    pub total_weight: Decimal,
    pub wastage: Decimal,
    pub final_weight: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl LineItem {
    /// Validate and price a new line item
    ///
    /// # Arguments
    /// * `new_item` - User entry (name, weight, quantity, making charge, metal)
    /// * `rate` - Per-gram rate of the item's metal
    /// * `calculator` - Calculator carrying the wastage rate
    pub fn new(new_item: NewLineItem, rate: Decimal, calculator: &PriceCalculator) -> Result<Self> {
        let name = Self::validate_name(&new_item.name)?;

        let breakdown = calculator.calculate(&PriceInput {
            weight: new_item.weight,
            quantity: new_item.quantity,
            rate,
            making_charge: new_item.making_charge,
        })?;

        Ok(Self {
            id: None,
            name,
            weight: new_item.weight,
            quantity: new_item.quantity,
            making_charge: new_item.making_charge,
            metal_type: new_item.metal_type,
            total_weight: breakdown.total_weight,
            wastage: breakdown.wastage,
            final_weight: breakdown.final_weight,
            total_price: breakdown.total_price,
            created_at: Utc::now(),
        })
    }

    /// Same item carrying the id the store assigned
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Trimmed name, non-empty and at most 255 characters
    fn validate_name(name: &str) -> Result<String> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::invalid_input("Item name cannot be empty"));
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::invalid_input(format!(
                "Item name cannot exceed {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(name.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemResponse {
    pub id: Option<i64>,
    pub name: String,
    pub metal_type: MetalType,
    pub weight: String,
    pub quantity: i32,
    pub making_charge: String,
    pub total_weight: String,
    pub wastage: String,
    pub final_weight: String,
    pub total_price: String,
    pub created_at: String,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            metal_type: item.metal_type,
            weight: format_weight(item.weight),
            quantity: item.quantity,
            making_charge: format_money(item.making_charge),
            total_weight: format_weight(item.total_weight),
            wastage: format_weight(item.wastage),
            final_weight: format_weight(item.final_weight),
            total_price: format_money(item.total_price),
            created_at: item.created_at.to_rfc3339(),
        }
    }
}
