// Line item store
//
// The bill service only depends on the `LineItemRepository` trait; the
// SQLite implementation is constructed in main and injected.
//
// Decimal columns are TEXT so the stored values round-trip exactly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

use crate::core::{AppError, MetalType, Result};
use crate::modules::billing::models::LineItem;

/// Storage for the line items of the active bill
#[async_trait]
pub trait LineItemRepository: Send + Sync {
    /// All items of the active bill, in insertion order
    async fn current_items(&self) -> Result<Vec<LineItem>>;

    /// Insert an item and return its generated id
    async fn insert(&self, item: &LineItem) -> Result<i64>;

    async fn find_by_id(&self, id: i64) -> Result<Option<LineItem>>;

    /// Delete an item; `false` when no row had that id
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Delete every item, returning how many were removed
    async fn clear_all(&self) -> Result<u64>;
}

/// SQLite-backed line item store
pub struct SqliteLineItemRepository {
    pool: SqlitePool,
}

impl SqliteLineItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LineItemRepository for SqliteLineItemRepository {
    async fn current_items(&self) -> Result<Vec<LineItem>> {
        let rows = sqlx::query_as::<_, LineItemRow>(
            r#"
            SELECT
                id, name, weight, quantity, making_charge, metal_type,
                total_weight, wastage, final_weight, total_price, created_at
            FROM line_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LineItemRow::into_line_item).collect()
    }

    async fn insert(&self, item: &LineItem) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO line_items (
                name, weight, quantity, making_charge, metal_type,
                total_weight, wastage, final_weight, total_price, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.name)
        .bind(item.weight.to_string())
        .bind(item.quantity)
        .bind(item.making_charge.to_string())
        .bind(item.metal_type.code())
        .bind(item.total_weight.to_string())
        .bind(item.wastage.to_string())
        .bind(item.final_weight.to_string())
        .bind(item.total_price.to_string())
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LineItem>> {
        let row = sqlx::query_as::<_, LineItemRow>(
            r#"
            SELECT
                id, name, weight, quantity, making_charge, metal_type,
                total_weight, wastage, final_weight, total_price, created_at
            FROM line_items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LineItemRow::into_line_item).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM line_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM line_items")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// Helper struct for database mapping

#[derive(Debug, FromRow)]
struct LineItemRow {
    id: i64,
    name: String,
    weight: String,
    quantity: i32,
    making_charge: String,
    metal_type: String,
    total_weight: String,
    wastage: String,
    final_weight: String,
    total_price: String,
    created_at: DateTime<Utc>,
}

impl LineItemRow {
    fn into_line_item(self) -> Result<LineItem> {
        let metal_type = MetalType::from_str(&self.metal_type)
            .map_err(|e| AppError::internal(format!("Invalid metal type in database: {}", e)))?;

        Ok(LineItem {
            id: Some(self.id),
            name: self.name,
            weight: parse_decimal("weight", &self.weight)?,
            quantity: self.quantity,
            making_charge: parse_decimal("making_charge", &self.making_charge)?,
            metal_type,
            total_weight: parse_decimal("total_weight", &self.total_weight)?,
            wastage: parse_decimal("wastage", &self.wastage)?,
            final_weight: parse_decimal("final_weight", &self.final_weight)?,
            total_price: parse_decimal("total_price", &self.total_price)?,
            created_at: self.created_at,
        })
    }
}

fn parse_decimal(column: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|e| {
        AppError::internal(format!("Invalid {} in database ({}): {}", column, value, e))
    })
}
