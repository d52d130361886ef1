use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::{LineItem, LineItemResponse};
use super::metal_rates::{MetalRates, MetalRatesResponse};
use crate::core::money::format_money;
use crate::core::{AppError, MetalType, Result};

/// Items of one metal and their subtotal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetalGroup {
    pub metal_type: MetalType,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
}

/// Bill partitioned by metal with per-group subtotals and a grand total.
///
/// Derived from the current items and rates, never stored. Every metal
/// gets a group, empty ones with a zero subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillSummary {
    pub groups: Vec<MetalGroup>,
    pub grand_total: Decimal,
    pub rates: MetalRates,
    pub item_count: usize,
}

impl BillSummary {
    /// Partition items by metal, keeping their order, and sum totals.
    ///
    /// Fails with InvalidInput when a total exceeds what `Decimal` holds.
    pub fn from_items(items: Vec<LineItem>, rates: MetalRates) -> Result<Self> {
        let item_count = items.len();
        let mut groups: Vec<MetalGroup> = MetalType::ALL
            .iter()
            .map(|&metal_type| MetalGroup {
                metal_type,
                items: Vec::new(),
                subtotal: Decimal::ZERO,
            })
            .collect();

        for item in items {
            if let Some(group) = groups.iter_mut().find(|g| g.metal_type == item.metal_type) {
                group.subtotal = group
                    .subtotal
                    .checked_add(item.total_price)
                    .ok_or_else(|| {
                        AppError::invalid_input(format!(
                            "{} subtotal is too large to calculate",
                            group.metal_type.display_name()
                        ))
                    })?;
                group.items.push(item);
            }
        }

        let grand_total = groups
            .iter()
            .try_fold(Decimal::ZERO, |total, g| total.checked_add(g.subtotal))
            .ok_or_else(|| AppError::invalid_input("Grand total is too large to calculate"))?;

        Ok(Self {
            groups,
            grand_total,
            rates,
            item_count,
        })
    }

    pub fn group(&self, metal: MetalType) -> Option<&MetalGroup> {
        self.groups.iter().find(|g| g.metal_type == metal)
    }

    /// Subtotal for one metal, zero when it has no items
    pub fn subtotal(&self, metal: MetalType) -> Decimal {
        self.group(metal).map(|g| g.subtotal).unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalGroupResponse {
    pub metal_type: MetalType,
    pub display_name: String,
    pub items: Vec<LineItemResponse>,
    pub subtotal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillSummaryResponse {
    pub groups: Vec<MetalGroupResponse>,
    pub grand_total: String,
    pub rates: MetalRatesResponse,
    pub item_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl From<&BillSummary> for BillSummaryResponse {
    fn from(summary: &BillSummary) -> Self {
        Self {
            groups: summary
                .groups
                .iter()
                .map(|group| MetalGroupResponse {
                    metal_type: group.metal_type,
                    display_name: group.metal_type.display_name().to_string(),
                    items: group.items.iter().map(LineItemResponse::from).collect(),
                    subtotal: format_money(group.subtotal),
                })
                .collect(),
            grand_total: format_money(summary.grand_total),
            rates: MetalRatesResponse::from(&summary.rates),
            item_count: summary.item_count,
            generated_at: Utc::now(),
        }
    }
}
