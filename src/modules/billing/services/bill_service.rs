use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::error::AppError;
use crate::modules::billing::models::{BillSummary, LineItem, MetalRates, NewLineItem};
use crate::modules::billing::repositories::LineItemRepository;
use crate::modules::pricing::PriceCalculator;

/// Service for the running bill
///
/// Holds the session's metal rates and prices every added item against
/// them. Items live in the injected store; every operation awaits the
/// store before returning, so reads see the latest completed write.
pub struct BillService {
    line_item_repo: Arc<dyn LineItemRepository>,
    calculator: PriceCalculator,
    rates: RwLock<Option<MetalRates>>,
}

impl BillService {
    pub fn new(line_item_repo: Arc<dyn LineItemRepository>, calculator: PriceCalculator) -> Self {
        Self {
            line_item_repo,
            calculator,
            rates: RwLock::new(None),
        }
    }

    /// Set the per-gram rates for this bill
    pub async fn set_rates(&self, rates: MetalRates) -> Result<MetalRates, AppError> {
        rates.validate()?;
        *self.rates.write().await = Some(rates);

        tracing::info!(
            gold_rate = %rates.gold_rate,
            silver_rate = %rates.silver_rate,
            "Metal rates set"
        );

        Ok(rates)
    }

    /// Rates in force, if a bill has been started
    pub async fn rates(&self) -> Option<MetalRates> {
        *self.rates.read().await
    }

    /// Price a new item against the active rates and append it to the bill
    pub async fn add(&self, new_item: NewLineItem) -> Result<LineItem, AppError> {
        let rates = self.require_rates().await?;
        let rate = rates.rate_for(new_item.metal_type);

        let item = LineItem::new(new_item, rate, &self.calculator)?;
        let id = self.line_item_repo.insert(&item).await?;
        let item = item.with_id(id);

        tracing::info!(
            item_id = id,
            metal = %item.metal_type,
            total_price = %item.total_price,
            "Line item added"
        );

        Ok(item)
    }

    /// Items of the active bill in the order they were added
    pub async fn items(&self) -> Result<Vec<LineItem>, AppError> {
        self.line_item_repo.current_items().await
    }

    pub async fn get(&self, id: i64) -> Result<LineItem, AppError> {
        self.line_item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Line item {} not found", id)))
    }

    /// Remove one item by id
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        if !self.line_item_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Line item {} not found", id)));
        }

        tracing::info!(item_id = id, "Line item removed");
        Ok(())
    }

    /// Summarize the active bill against the active rates
    pub async fn summarize(&self) -> Result<BillSummary, AppError> {
        let rates = self.require_rates().await?;
        let items = self.line_item_repo.current_items().await?;

        let summary = BillSummary::from_items(items, rates)?;
        tracing::debug!(
            item_count = summary.item_count,
            grand_total = %summary.grand_total,
            "Bill summarized"
        );

        Ok(summary)
    }

    /// Empty the bill and forget its rates, starting a fresh one
    pub async fn clear(&self) -> Result<u64, AppError> {
        let removed = self.line_item_repo.clear_all().await?;
        *self.rates.write().await = None;

        tracing::info!(removed, "Bill cleared");
        Ok(removed)
    }

    async fn require_rates(&self) -> Result<MetalRates, AppError> {
        self.rates().await.ok_or_else(|| {
            AppError::invalid_input("Metal rates must be set before billing items")
        })
    }
}
