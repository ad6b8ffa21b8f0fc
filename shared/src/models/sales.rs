//! Sales Models

use serde::{Deserialize, Serialize};

/// Monthly sales figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    /// Short month name ("Jan")
    pub month: String,
    pub sales: u64,
    pub orders: u32,
    pub returns: u32,
}

/// Sales per product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub name: String,
    pub sales: u64,
    /// Growth in percent
    pub growth: f64,
    pub items: u32,
}
