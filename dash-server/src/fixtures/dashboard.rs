//! Static dashboard fixtures: vendors, inventory, sales and category figures

use shared::models::{
    CategorySales, InventoryItem, InventoryMetrics, PerformanceMetrics, SalesData,
    TopSellingItem, Vendor, WarehouseLocation,
};

/// All static dashboard fixtures, loaded once at startup
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub vendors: Vec<Vendor>,
    pub inventory: Vec<InventoryItem>,
    pub sales: Vec<SalesData>,
    pub categories: Vec<CategorySales>,
}

impl DashboardData {
    pub fn load() -> Self {
        Self {
            vendors: vendors(),
            inventory: inventory_items(),
            sales: monthly_sales(),
            categories: category_sales(),
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::load()
    }
}

fn vendor(id: &str, name: &str, orders: u32, reliability: f64, days: f64, contracts: u32) -> Vendor {
    Vendor {
        id: id.to_string(),
        name: name.to_string(),
        total_orders: orders,
        reliability,
        avg_delivery_days: days,
        active_contracts: contracts,
    }
}

pub fn vendors() -> Vec<Vendor> {
    vec![
        vendor("1", "Vendor A", 150, 0.95, 2.3, 5),
        vendor("2", "Vendor B", 120, 0.88, 3.1, 3),
        vendor("3", "Vendor C", 90, 0.92, 2.8, 4),
        vendor("4", "Vendor D", 75, 0.85, 3.5, 2),
        vendor("5", "Vendor E", 60, 0.90, 2.5, 3),
    ]
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    stock_level: u32,
    (lat, lng, warehouse): (f64, f64, &str),
    category: &str,
    last_restock_date: &str,
    threshold: u32,
    turnover_rate: f64,
    profit_margin: f64,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        stock_level,
        location: WarehouseLocation {
            lat,
            lng,
            name: warehouse.to_string(),
        },
        category: category.to_string(),
        last_restock_date: last_restock_date.to_string(),
        threshold,
        turnover_rate,
        profit_margin,
    }
}

// Warehouses in Dhaka
pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        item(
            "1",
            "Product A",
            500,
            (23.8103, 90.4125, "Uttara Warehouse"),
            "Electronics",
            "2024-02-15",
            100,
            0.85,
            0.25,
        ),
        item(
            "2",
            "Product B",
            300,
            (23.7461, 90.3742, "Mohammadpur Warehouse"),
            "Clothing",
            "2024-02-10",
            50,
            0.92,
            0.35,
        ),
        item(
            "3",
            "Product C",
            750,
            (23.7925, 90.4078, "Banani Warehouse"),
            "Electronics",
            "2024-02-20",
            150,
            0.78,
            0.30,
        ),
        item(
            "4",
            "Product D",
            200,
            (23.7511, 90.3934, "Dhanmondi Warehouse"),
            "Home Goods",
            "2024-02-18",
            40,
            0.65,
            0.40,
        ),
    ]
}

pub fn monthly_sales() -> Vec<SalesData> {
    [
        ("Jan", 45_000, 180, 12),
        ("Feb", 52_000, 210, 15),
        ("Mar", 48_000, 195, 10),
        ("Apr", 61_000, 250, 18),
        ("May", 55_000, 220, 14),
        ("Jun", 58_000, 235, 16),
    ]
    .into_iter()
    .map(|(month, sales, orders, returns)| SalesData {
        month: month.to_string(),
        sales,
        orders,
        returns,
    })
    .collect()
}

pub fn category_sales() -> Vec<CategorySales> {
    [
        ("Electronics", 185_000, 12.5, 45),
        ("Clothing", 142_000, 8.3, 78),
        ("Home Goods", 98_000, 15.2, 34),
        ("Accessories", 76_000, 5.7, 56),
    ]
    .into_iter()
    .map(|(name, sales, growth, items)| CategorySales {
        name: name.to_string(),
        sales,
        growth,
        items,
    })
    .collect()
}

// ========== Headline figures (not derived from the lists above) ==========

pub const WEEKLY_ORDERS: u32 = 450;
pub const MONTHLY_REVENUE: u64 = 308_000;
pub const AVERAGE_ORDER_VALUE: u64 = 2_000;
pub const CUSTOMER_RETENTION_RATE: f64 = 0.78;

pub fn top_selling_items() -> Vec<TopSellingItem> {
    [
        ("Product A", 120, 45_000, 15.2),
        ("Product B", 85, 32_000, 8.7),
        ("Product C", 65, 28_000, 12.3),
    ]
    .into_iter()
    .map(|(name, sales, revenue, growth)| TopSellingItem {
        name: name.to_string(),
        sales,
        revenue,
        growth,
    })
    .collect()
}

pub fn inventory_metrics() -> InventoryMetrics {
    InventoryMetrics {
        turnover_rate: 0.82,
        stockout_rate: 0.05,
        average_restock_time: 2.8,
        capacity_utilization: 0.75,
    }
}

pub fn performance_metrics() -> PerformanceMetrics {
    PerformanceMetrics {
        order_fulfillment_rate: 0.95,
        return_rate: 0.04,
        delivery_on_time: 0.92,
        customer_satisfaction: 4.3,
    }
}
