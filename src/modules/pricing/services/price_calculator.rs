use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::modules::pricing::models::{PriceBreakdown, PriceInput};

/// Wastage added to raw weight before pricing (10%)
pub const DEFAULT_WASTAGE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// PriceCalculator turns weight, quantity, rate and making charge into a
/// price breakdown.
///
/// Formula: total_price = ((weight × quantity) × (1 + wastage_rate)) × rate + making_charge
///
/// The calculator is pure: identical inputs always give identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCalculator {
    wastage_rate: Decimal,
}

impl PriceCalculator {
    pub fn new() -> Self {
        Self {
            wastage_rate: DEFAULT_WASTAGE_RATE,
        }
    }

    /// Calculator with a non-default wastage rate, as a fraction in [0, 1]
    pub fn with_wastage_rate(wastage_rate: Decimal) -> Result<Self, AppError> {
        Self::validate_wastage_rate(wastage_rate)?;
        Ok(Self { wastage_rate })
    }

    pub fn wastage_rate(&self) -> Decimal {
        self.wastage_rate
    }

    /// Price one line
    pub fn calculate(&self, input: &PriceInput) -> Result<PriceBreakdown, AppError> {
        Self::validate_weight(input.weight)?;
        Self::validate_quantity(input.quantity)?;
        Self::validate_rate(input.rate)?;
        Self::validate_making_charge(input.making_charge)?;

        let total_weight = input
            .weight
            .checked_mul(Decimal::from(input.quantity))
            .ok_or_else(|| too_large("Total weight"))?;
        let wastage = total_weight
            .checked_mul(self.wastage_rate)
            .ok_or_else(|| too_large("Wastage"))?;
        let final_weight = total_weight
            .checked_add(wastage)
            .ok_or_else(|| too_large("Final weight"))?;
        let metal_cost = final_weight
            .checked_mul(input.rate)
            .ok_or_else(|| too_large("Metal cost"))?;
        let total_price = metal_cost
            .checked_add(input.making_charge)
            .ok_or_else(|| too_large("Total price"))?;

        Ok(PriceBreakdown {
            total_weight,
            wastage,
            final_weight,
            metal_cost,
            making_charge: input.making_charge,
            total_price,
        })
    }

    /// Weight must be strictly positive
    pub fn validate_weight(weight: Decimal) -> Result<(), AppError> {
        if weight <= Decimal::ZERO {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got: {}",
                weight
            )));
        }
        Ok(())
    }

    /// Quantity must be at least one piece
    pub fn validate_quantity(quantity: i32) -> Result<(), AppError> {
        if quantity < 1 {
            return Err(AppError::invalid_input(format!(
                "Quantity must be at least 1, got: {}",
                quantity
            )));
        }
        Ok(())
    }

    /// Metal rate must be strictly positive
    pub fn validate_rate(rate: Decimal) -> Result<(), AppError> {
        if rate <= Decimal::ZERO {
            return Err(AppError::invalid_input(format!(
                "Rate must be positive, got: {}",
                rate
            )));
        }
        Ok(())
    }

    /// Making charge may be zero but never negative
    pub fn validate_making_charge(making_charge: Decimal) -> Result<(), AppError> {
        if making_charge < Decimal::ZERO {
            return Err(AppError::invalid_input(format!(
                "Making charge must be non-negative, got: {}",
                making_charge
            )));
        }
        Ok(())
    }

    pub fn validate_wastage_rate(wastage_rate: Decimal) -> Result<(), AppError> {
        if wastage_rate < Decimal::ZERO || wastage_rate > Decimal::ONE {
            return Err(AppError::invalid_input(format!(
                "Wastage rate must be between 0 and 1, got: {}",
                wastage_rate
            )));
        }
        Ok(())
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn too_large(quantity: &str) -> AppError {
    AppError::invalid_input(format!("{} is too large to calculate", quantity))
}
