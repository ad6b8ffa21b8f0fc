//! API 路由模块
//!
//! 每个子模块提供 `router()`，在 [`crate::routes`] 中合并。

pub mod dashboard;
pub mod extract;
pub mod health;
pub mod inventory;
pub mod shops;
pub mod vendors;
