//! Shop Model

use serde::{Deserialize, Serialize};

/// Geographic bounding box (north/south latitude, east/west longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Whether `(lat, lng)` lies inside the box (edges inclusive)
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.south..=self.north).contains(&lat) && (self.west..=self.east).contains(&lng)
    }
}

/// Where a shop is: area label, street address and coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopLocation {
    /// Area label (e.g. "Gulshan")
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Shop entity
///
/// Generated in batches; `id` is the 1-based position inside the batch and
/// carries no meaning across batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: u32,
    pub name: String,
    pub location: ShopLocation,
    pub orders_last_30_days: u32,
}

impl Shop {
    /// Area label of this shop
    pub fn area(&self) -> &str {
        &self.location.name
    }

    pub fn performance(&self) -> PerformanceTier {
        PerformanceTier::from_orders(self.orders_last_30_days)
    }
}

/// Shop performance badge shown in the shop table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// 200 orders or more in the last 30 days
    Excellent,
    /// 150..200 orders
    Good,
    /// Fewer than 150 orders
    NeedsImprovement,
}

impl PerformanceTier {
    pub const EXCELLENT_MIN_ORDERS: u32 = 200;
    pub const GOOD_MIN_ORDERS: u32 = 150;

    pub fn from_orders(orders: u32) -> Self {
        if orders >= Self::EXCELLENT_MIN_ORDERS {
            Self::Excellent
        } else if orders >= Self::GOOD_MIN_ORDERS {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }
}

/// Shop row in the shop table (shop plus its performance badge)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopListItem {
    #[serde(flatten)]
    pub shop: Shop,
    pub performance: PerformanceTier,
}

impl From<Shop> for ShopListItem {
    fn from(shop: Shop) -> Self {
        let performance = shop.performance();
        Self { shop, performance }
    }
}

/// Filtered shop listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopListResponse {
    /// Number of shops matching the query
    pub total: usize,
    /// Number of shops in the current batch
    pub batch_size: usize,
    /// Batch generation time (Unix millis)
    pub generated_at: i64,
    pub items: Vec<ShopListItem>,
}

/// Area dropdown option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaOption {
    pub value: String,
    pub label: String,
}

/// Popup content of a map marker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPopup {
    pub name: String,
    pub address: String,
    pub orders_last_30_days: u32,
}

/// One marker per visible shop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: u32,
    /// `[lat, lng]`
    pub position: [f64; 2],
    pub popup: MarkerPopup,
}

impl From<&Shop> for MapMarker {
    fn from(shop: &Shop) -> Self {
        Self {
            id: shop.id,
            position: [shop.location.lat, shop.location.lng],
            popup: MarkerPopup {
                name: shop.name.clone(),
                address: shop.location.address.clone(),
                orders_last_30_days: shop.orders_last_30_days,
            },
        }
    }
}

/// Map view model: viewport plus markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub bounds: GeoBounds,
    pub markers: Vec<MapMarker>,
}

/// Regenerate request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegenerateShops {
    /// Batch size; defaults to the configured batch size. Zero or negative
    /// values produce an empty batch.
    pub count: Option<i64>,
}

/// Summary of a freshly generated batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopBatchInfo {
    pub batch_size: usize,
    pub generated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shop(orders: u32) -> Shop {
        Shop {
            id: 1,
            name: "Royal Cafe Mart".to_string(),
            location: ShopLocation {
                name: "Gulshan".to_string(),
                address: "House #12, Road #5, Gulshan, Dhaka".to_string(),
                lat: 23.78,
                lng: 90.41,
            },
            orders_last_30_days: orders,
        }
    }

    #[test]
    fn test_performance_tier_boundaries() {
        assert_eq!(PerformanceTier::from_orders(50), PerformanceTier::NeedsImprovement);
        assert_eq!(PerformanceTier::from_orders(149), PerformanceTier::NeedsImprovement);
        assert_eq!(PerformanceTier::from_orders(150), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_orders(199), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_orders(200), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_orders(300), PerformanceTier::Excellent);
    }

    #[test]
    fn test_shop_serializes_camel_case() {
        let json = serde_json::to_value(sample_shop(210)).unwrap();
        assert_eq!(json["ordersLast30Days"], 210);
        assert_eq!(json["location"]["name"], "Gulshan");
        assert!(json.get("orders_last_30_days").is_none());
    }

    #[test]
    fn test_list_item_flattens_shop() {
        let item = ShopListItem::from(sample_shop(160));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Royal Cafe Mart");
        assert_eq!(json["performance"], "good");
    }

    #[test]
    fn test_marker_from_shop() {
        let shop = sample_shop(99);
        let marker = MapMarker::from(&shop);
        assert_eq!(marker.position, [23.78, 90.41]);
        assert_eq!(marker.popup.address, shop.location.address);
        assert_eq!(marker.popup.orders_last_30_days, 99);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = GeoBounds {
            north: 2.0,
            south: 1.0,
            east: 4.0,
            west: 3.0,
        };
        assert!(bounds.contains(1.0, 3.0));
        assert!(bounds.contains(2.0, 4.0));
        assert!(!bounds.contains(0.99, 3.5));
        assert!(!bounds.contains(1.5, 4.01));
    }
}
