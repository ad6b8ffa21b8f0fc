//! Shop search: text/area filter and area dropdown options

pub mod areas;
pub mod filter;

pub use areas::{ALL_AREAS_LABEL, area_options};
pub use filter::{ALL_AREAS, AreaSelector, ShopFilter, ShopQuery, filter_shops};
