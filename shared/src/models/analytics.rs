//! Analytics Summary Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSellingItem {
    pub name: String,
    pub sales: u32,
    pub revenue: u64,
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMetrics {
    pub turnover_rate: f64,
    pub stockout_rate: f64,
    /// Days
    pub average_restock_time: f64,
    pub capacity_utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub order_fulfillment_rate: f64,
    pub return_rate: f64,
    pub delivery_on_time: f64,
    /// 1.0 - 5.0
    pub customer_satisfaction: f64,
}

/// Dashboard headline numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_vendors: usize,
    /// Sum of stock levels across all inventory items
    pub total_inventory: u64,
    pub weekly_orders: u32,
    pub monthly_revenue: u64,
    pub average_order_value: u64,
    pub customer_retention_rate: f64,
    pub top_selling_items: Vec<TopSellingItem>,
    pub inventory_metrics: InventoryMetrics,
    pub performance_metrics: PerformanceMetrics,
}
