//! Vendor Model

use serde::{Deserialize, Serialize};

/// Supplier entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub total_orders: u32,
    /// Share of orders delivered as agreed (0.0 - 1.0)
    pub reliability: f64,
    pub avg_delivery_days: f64,
    pub active_contracts: u32,
}
