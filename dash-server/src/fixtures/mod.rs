//! Fixture data
//!
//! - [`shops`] - random shop batches (generator)
//! - [`catalog`] - word lists and bounds the generator draws from
//! - [`dashboard`] - static vendors, inventory and sales figures

pub mod catalog;
pub mod dashboard;
pub mod shops;

pub use catalog::ShopCatalog;
pub use dashboard::DashboardData;
pub use shops::{ParsedAddress, generate, generate_with, parse_address};
