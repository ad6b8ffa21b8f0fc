//! Shop filter
//!
//! A shop is visible when both hold:
//! - the search text is empty, or it occurs (case-insensitively) in the
//!   shop name or address
//! - the area selector is `all`, or equals the shop's area label exactly
//!
//! Filtering is stable and never mutates the batch.

use serde::{Deserialize, Serialize};
use shared::models::Shop;

/// Area selector value meaning "every area"
pub const ALL_AREAS: &str = "all";

/// Area dropdown selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AreaSelector {
    #[default]
    All,
    /// Exact, case-sensitive area label
    Named(String),
}

impl AreaSelector {
    pub fn parse(value: &str) -> Self {
        if value == ALL_AREAS {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    pub fn matches(&self, area: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == area,
        }
    }
}

/// Search text + area selection, as sent by the shop view
///
/// Deserializes from the `q` and `area` query parameters; both are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_area")]
    pub area: String,
}

fn default_area() -> String {
    ALL_AREAS.to_string()
}

impl ShopQuery {
    pub fn to_filter(&self) -> ShopFilter {
        ShopFilter::new(&self.q, AreaSelector::parse(&self.area))
    }
}

/// Compiled shop predicate
///
/// The search text is lowercased once up front.
#[derive(Debug, Clone, Default)]
pub struct ShopFilter {
    needle: String,
    area: AreaSelector,
}

impl ShopFilter {
    pub fn new(query: &str, area: AreaSelector) -> Self {
        Self {
            needle: query.to_lowercase(),
            area,
        }
    }

    pub fn matches_search(&self, shop: &Shop) -> bool {
        self.needle.is_empty()
            || shop.name.to_lowercase().contains(&self.needle)
            || shop.location.address.to_lowercase().contains(&self.needle)
    }

    pub fn matches_area(&self, shop: &Shop) -> bool {
        self.area.matches(&shop.location.name)
    }

    pub fn matches(&self, shop: &Shop) -> bool {
        self.matches_search(shop) && self.matches_area(shop)
    }

    /// Lazily yield matching shops in their original order
    ///
    /// The yielded references borrow `shops` only, so they outlive the filter.
    pub fn apply<'f, 's>(
        &'f self,
        shops: &'s [Shop],
    ) -> impl Iterator<Item = &'s Shop> + use<'f, 's> {
        shops.iter().filter(move |shop| self.matches(shop))
    }
}

/// Shops matching `query` and `area`, in original order
pub fn filter_shops<'a>(shops: &'a [Shop], query: &str, area: &str) -> Vec<&'a Shop> {
    let filter = ShopFilter::new(query, AreaSelector::parse(area));
    filter.apply(shops).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ShopCatalog, generate_with};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use shared::models::ShopLocation;

    fn royal_cafe() -> Shop {
        Shop {
            id: 1,
            name: "Royal Cafe Mart".to_string(),
            location: ShopLocation {
                name: "Gulshan".to_string(),
                address: "House #12, Road #5, Gulshan, Dhaka".to_string(),
                lat: 23.79,
                lng: 90.41,
            },
            orders_last_30_days: 210,
        }
    }

    fn batch() -> Vec<Shop> {
        generate_with(&ShopCatalog::dhaka(), 200, &mut StdRng::seed_from_u64(11))
    }

    fn ids(shops: &[&Shop]) -> Vec<u32> {
        shops.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_single_record_examples() {
        let shops = vec![royal_cafe()];
        assert_eq!(filter_shops(&shops, "cafe", "all"), vec![&shops[0]]);
        assert!(filter_shops(&shops, "cafe", "Banani").is_empty());
        assert!(filter_shops(&shops, "xyz", "all").is_empty());
    }

    #[test]
    fn test_search_matches_address() {
        let shops = vec![royal_cafe()];
        assert_eq!(filter_shops(&shops, "road #5", "all").len(), 1);
        assert_eq!(filter_shops(&shops, "DHAKA", "Gulshan").len(), 1);
    }

    #[test]
    fn test_empty_query_all_areas_is_identity() {
        let shops = batch();
        let result = filter_shops(&shops, "", "all");
        assert_eq!(result.len(), shops.len());
        assert!(result.iter().zip(&shops).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_case_insensitive() {
        let shops = batch();
        assert_eq!(
            ids(&filter_shops(&shops, "gulshan", "all")),
            ids(&filter_shops(&shops, "GULSHAN", "all"))
        );
        assert_eq!(
            ids(&filter_shops(&shops, "royal", "Uttara")),
            ids(&filter_shops(&shops, "rOyAl", "Uttara"))
        );
    }

    #[test]
    fn test_area_only_returns_exact_subset_in_order() {
        let shops = batch();
        let expected: Vec<u32> = shops
            .iter()
            .filter(|s| s.location.name == "Uttara")
            .map(|s| s.id)
            .collect();
        let result = ids(&filter_shops(&shops, "", "Uttara"));
        assert_eq!(result, expected);
        assert!(result.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_idempotent() {
        let shops = batch();
        let once: Vec<Shop> = filter_shops(&shops, "store", "Mirpur")
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Shop> = filter_shops(&once, "store", "Mirpur")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_area_is_case_sensitive() {
        let shops = vec![royal_cafe()];
        assert!(filter_shops(&shops, "", "gulshan").is_empty());
        assert_eq!(filter_shops(&shops, "", "Gulshan").len(), 1);
    }

    #[test]
    fn test_unknown_area_is_empty() {
        let shops = batch();
        assert!(filter_shops(&shops, "", "Atlantis").is_empty());
    }

    #[test]
    fn test_query_defaults() {
        let query: ShopQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.q, "");
        assert_eq!(query.area, "all");
        let filter = query.to_filter();
        assert!(filter.matches(&royal_cafe()));
    }

    #[test]
    fn test_matches_outlive_filter() {
        let shops = vec![royal_cafe()];
        let matched: Vec<&Shop> = {
            let filter = ShopFilter::new("royal", AreaSelector::All);
            filter.apply(&shops).collect()
        };
        assert_eq!(matched, vec![&shops[0]]);
    }

    #[test]
    fn test_area_selector_parse() {
        assert_eq!(AreaSelector::parse("all"), AreaSelector::All);
        assert_eq!(
            AreaSelector::parse("Wari"),
            AreaSelector::Named("Wari".to_string())
        );
        // Only the lowercase literal selects every area
        assert_eq!(
            AreaSelector::parse("All"),
            AreaSelector::Named("All".to_string())
        );
    }

    #[test]
    fn test_apply_is_restartable() {
        let shops = batch();
        let filter = ShopFilter::new("mart", AreaSelector::All);
        let first: Vec<u32> = filter.apply(&shops).map(|s| s.id).collect();
        let second: Vec<u32> = filter.apply(&shops).map(|s| s.id).collect();
        assert_eq!(first, second);
        assert_eq!(ShopFilter::default().apply(&shops).count(), shops.len());
    }
}
