use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::format_money;
use crate::core::{MetalType, Result};
use crate::modules::pricing::PriceCalculator;

/// Per-gram rates for the current bill
///
/// Entered once when a bill is started and held until the bill is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalRates {
    pub gold_rate: Decimal,
    pub silver_rate: Decimal,
}

impl MetalRates {
    pub fn new(gold_rate: Decimal, silver_rate: Decimal) -> Result<Self> {
        let rates = Self {
            gold_rate,
            silver_rate,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Both rates must be strictly positive
    pub fn validate(&self) -> Result<()> {
        PriceCalculator::validate_rate(self.gold_rate)?;
        PriceCalculator::validate_rate(self.silver_rate)?;
        Ok(())
    }

    /// Rate that applies to the given metal
    pub fn rate_for(&self, metal: MetalType) -> Decimal {
        match metal {
            MetalType::Gold => self.gold_rate,
            MetalType::Silver => self.silver_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalRatesResponse {
    pub gold_rate: String,
    pub silver_rate: String,
}

impl From<&MetalRates> for MetalRatesResponse {
    fn from(rates: &MetalRates) -> Self {
        Self {
            gold_rate: format_money(rates.gold_rate),
            silver_rate: format_money(rates.silver_rate),
        }
    }
}
