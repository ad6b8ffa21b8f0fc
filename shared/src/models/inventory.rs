//! Inventory Model

use serde::{Deserialize, Serialize};

/// Warehouse location of an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

/// Inventory item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub stock_level: u32,
    pub location: WarehouseLocation,
    pub category: String,
    /// ISO date (YYYY-MM-DD)
    pub last_restock_date: String,
    /// Reorder threshold
    pub threshold: u32,
    pub turnover_rate: f64,
    pub profit_margin: f64,
}

impl InventoryItem {
    /// Stock has fallen below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock_level < self.threshold
    }
}

/// Low stock alert entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub item_id: String,
    pub name: String,
    pub stock_level: u32,
    pub threshold: u32,
    /// Units needed to get back to the threshold
    pub shortfall: u32,
}

impl From<&InventoryItem> for LowStockAlert {
    fn from(item: &InventoryItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            stock_level: item.stock_level,
            threshold: item.threshold,
            shortfall: item.threshold.saturating_sub(item.stock_level),
        }
    }
}
