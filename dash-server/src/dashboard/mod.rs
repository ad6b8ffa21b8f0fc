//! Dashboard metrics derived from the fixture lists

use shared::models::{AnalyticsSummary, InventoryItem, LowStockAlert};

use crate::fixtures::DashboardData;
use crate::fixtures::dashboard::{
    AVERAGE_ORDER_VALUE, CUSTOMER_RETENTION_RATE, MONTHLY_REVENUE, WEEKLY_ORDERS,
    inventory_metrics, performance_metrics, top_selling_items,
};

/// Total units in stock across all items
pub fn total_inventory(items: &[InventoryItem]) -> u64 {
    items.iter().map(|item| u64::from(item.stock_level)).sum()
}

/// Items whose stock has fallen below their threshold, in original order
pub fn low_stock_items(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|item| item.is_low_stock()).collect()
}

pub fn low_stock_alerts(items: &[InventoryItem]) -> Vec<LowStockAlert> {
    low_stock_items(items)
        .into_iter()
        .map(LowStockAlert::from)
        .collect()
}

/// Headline numbers for the dashboard landing page
pub fn analytics_summary(data: &DashboardData) -> AnalyticsSummary {
    AnalyticsSummary {
        total_vendors: data.vendors.len(),
        total_inventory: total_inventory(&data.inventory),
        weekly_orders: WEEKLY_ORDERS,
        monthly_revenue: MONTHLY_REVENUE,
        average_order_value: AVERAGE_ORDER_VALUE,
        customer_retention_rate: CUSTOMER_RETENTION_RATE,
        top_selling_items: top_selling_items(),
        inventory_metrics: inventory_metrics(),
        performance_metrics: performance_metrics(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::dashboard::inventory_items;

    fn with_stock(id: &str, stock_level: u32, threshold: u32) -> InventoryItem {
        let mut item = inventory_items().remove(0);
        item.id = id.to_string();
        item.stock_level = stock_level;
        item.threshold = threshold;
        item
    }

    #[test]
    fn test_total_inventory() {
        assert_eq!(total_inventory(&inventory_items()), 1750);
        assert_eq!(total_inventory(&[]), 0);
    }

    #[test]
    fn test_fixture_inventory_has_no_low_stock() {
        assert!(low_stock_items(&inventory_items()).is_empty());
    }

    #[test]
    fn test_low_stock_is_strictly_below_threshold() {
        let items = vec![
            with_stock("a", 10, 50),
            with_stock("b", 50, 50),
            with_stock("c", 49, 50),
            with_stock("d", 80, 50),
        ];
        let low: Vec<&str> = low_stock_items(&items)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(low, vec!["a", "c"]);
    }

    #[test]
    fn test_low_stock_alert_shortfall() {
        let alerts = low_stock_alerts(&[with_stock("a", 10, 50)]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].item_id, "a");
        assert_eq!(alerts[0].shortfall, 40);
    }

    #[test]
    fn test_analytics_summary_derived_fields() {
        let data = DashboardData::load();
        let summary = analytics_summary(&data);
        assert_eq!(summary.total_vendors, 5);
        assert_eq!(summary.total_inventory, 1750);
        assert_eq!(summary.weekly_orders, 450);
        assert_eq!(summary.top_selling_items.len(), 3);
    }

    #[test]
    fn test_analytics_summary_serializes_camel_case() {
        let json = serde_json::to_value(analytics_summary(&DashboardData::load())).unwrap();
        assert_eq!(json["totalInventory"], 1750);
        assert_eq!(json["inventoryMetrics"]["stockoutRate"], 0.05);
        assert_eq!(json["performanceMetrics"]["customerSatisfaction"], 4.3);
    }
}
