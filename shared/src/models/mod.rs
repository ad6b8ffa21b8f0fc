//! Data models
//!
//! Shared between dash-server and the dashboard front-end (via API).
//! Field names serialize as camelCase to match the front-end types.

pub mod analytics;
pub mod inventory;
pub mod sales;
pub mod shop;
pub mod vendor;

// Re-exports
pub use analytics::*;
pub use inventory::*;
pub use sales::*;
pub use shop::*;
pub use vendor::*;
