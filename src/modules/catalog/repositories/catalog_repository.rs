use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

use crate::core::{AppError, MetalType, Result};
use crate::modules::catalog::models::CatalogItem;

/// Storage for catalog entries
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Entries for one metal: defaults first, then user-added, each by name
    async fn list_by_metal(&self, metal: MetalType) -> Result<Vec<CatalogItem>>;

    /// Insert an entry; a duplicate name for the same metal is invalid input
    async fn insert(&self, item: &CatalogItem) -> Result<CatalogItem>;
}

pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    async fn list_by_metal(&self, metal: MetalType) -> Result<Vec<CatalogItem>> {
        let rows = sqlx::query_as::<_, CatalogItemRow>(
            r#"
            SELECT id, name, metal_type, is_default
            FROM catalog_items
            WHERE metal_type = ?
            ORDER BY is_default DESC, name COLLATE NOCASE
            "#,
        )
        .bind(metal.code())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CatalogItemRow::into_catalog_item).collect()
    }

    async fn insert(&self, item: &CatalogItem) -> Result<CatalogItem> {
        let result = sqlx::query(
            r#"
            INSERT INTO catalog_items (name, metal_type, is_default)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&item.name)
        .bind(item.metal_type.code())
        .bind(item.is_default)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::invalid_input(format!(
                        "{} catalog already has an item named '{}'",
                        item.metal_type.display_name(),
                        item.name
                    ));
                }
            }
            AppError::Persistence(e)
        })?;

        let mut created = item.clone();
        created.id = Some(result.last_insert_rowid());
        Ok(created)
    }
}

#[derive(Debug, FromRow)]
struct CatalogItemRow {
    id: i64,
    name: String,
    metal_type: String,
    is_default: bool,
}

impl CatalogItemRow {
    fn into_catalog_item(self) -> Result<CatalogItem> {
        let metal_type = MetalType::from_str(&self.metal_type)
            .map_err(|e| AppError::internal(format!("Invalid metal type in database: {}", e)))?;

        Ok(CatalogItem {
            id: Some(self.id),
            name: self.name,
            metal_type,
            is_default: self.is_default,
        })
    }
}
