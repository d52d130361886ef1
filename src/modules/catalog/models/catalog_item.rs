use serde::{Deserialize, Serialize};

use crate::core::{AppError, MetalType, Result};

const MAX_NAME_LEN: usize = 255;

/// A named kind of piece (Ring, Anklet, ...) offered for a metal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Option<i64>,
    pub name: String,
    pub metal_type: MetalType,
    /// Seeded with the shop's defaults rather than added by the user
    pub is_default: bool,
}

/// Request body for POST /catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCatalogItemRequest {
    pub name: String,
    pub metal_type: MetalType,
}

impl CatalogItem {
    /// User-added entry with a trimmed, validated name
    pub fn new(name: &str, metal_type: MetalType) -> Result<Self> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::invalid_input("Catalog item name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::invalid_input(format!(
                "Catalog item name cannot exceed {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(Self {
            id: None,
            name: name.to_string(),
            metal_type,
            is_default: false,
        })
    }
}
