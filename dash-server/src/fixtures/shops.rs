//! Shop fixture generator
//!
//! Builds a batch of synthetic shops inside the Dhaka bounding box. The
//! random source is injected so that seeded batches are reproducible;
//! [`generate`] uses the thread RNG.

use rand::Rng;
use rand::seq::SliceRandom;
use shared::models::{Shop, ShopLocation};

use super::catalog::ShopCatalog;

/// Generate `count` shops with the thread-local RNG
pub fn generate(count: usize) -> Vec<Shop> {
    generate_with(&ShopCatalog::dhaka(), count, &mut rand::thread_rng())
}

/// Generate `count` shops from `catalog` using `rng`
///
/// Shops are returned in generation order with ids `1..=count`.
pub fn generate_with<R: Rng + ?Sized>(
    catalog: &ShopCatalog,
    count: usize,
    rng: &mut R,
) -> Vec<Shop> {
    (0..count)
        .map(|index| generate_one(catalog, index as u32 + 1, rng))
        .collect()
}

fn generate_one<R: Rng + ?Sized>(catalog: &ShopCatalog, id: u32, rng: &mut R) -> Shop {
    let area = pick(catalog.areas, rng);

    let bounds = &catalog.bounds;
    let lat = bounds.south + rng.r#gen::<f64>() * (bounds.north - bounds.south);
    let lng = bounds.west + rng.r#gen::<f64>() * (bounds.east - bounds.west);
    debug_assert!(bounds.contains(lat, lng));

    let road_number = rng.gen_range(catalog.road_numbers.clone());
    let house_number = rng.gen_range(catalog.house_numbers.clone());

    let name = format!(
        "{} {} {}",
        pick(catalog.prefixes, rng),
        pick(catalog.categories, rng),
        pick(catalog.suffixes, rng)
    );

    Shop {
        id,
        name,
        location: ShopLocation {
            name: area.to_string(),
            address: format_address(house_number, road_number, area, catalog.city),
            lat,
            lng,
        },
        orders_last_30_days: rng.gen_range(catalog.monthly_orders.clone()),
    }
}

fn pick<R: Rng + ?Sized>(list: &[&'static str], rng: &mut R) -> &'static str {
    list.choose(rng).copied().unwrap_or_default()
}

/// `House #<house>, Road #<road>, <area>, <city>`
pub fn format_address(house: u32, road: u32, area: &str, city: &str) -> String {
    format!("House #{}, Road #{}, {}, {}", house, road, area, city)
}

/// Components of a generated address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub house: u32,
    pub road: u32,
    pub area: String,
    pub city: String,
}

/// Parse an address produced by [`format_address`]
pub fn parse_address(address: &str) -> Option<ParsedAddress> {
    let mut parts = address.split(", ");
    let house = parts.next()?.strip_prefix("House #")?.parse().ok()?;
    let road = parts.next()?.strip_prefix("Road #")?.parse().ok()?;
    let area = parts.next()?.to_string();
    let city = parts.next()?.to_string();
    if parts.next().is_some() {
        return None;
    }
    Some(ParsedAddress {
        house,
        road,
        area,
        city,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::catalog::{
        DHAKA_AREAS, DHAKA_BOUNDS, SHOP_CATEGORIES, SHOP_PREFIXES, SHOP_SUFFIXES,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(count: usize, seed: u64) -> Vec<Shop> {
        generate_with(&ShopCatalog::dhaka(), count, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_count_and_contiguous_ids() {
        for count in [0, 1, 7, 200] {
            let shops = seeded(count, 1);
            assert_eq!(shops.len(), count);
            for (i, shop) in shops.iter().enumerate() {
                assert_eq!(shop.id as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_coordinates_inside_bounds() {
        for shop in seeded(1000, 2) {
            let loc = &shop.location;
            assert!(loc.lat >= 23.6850 && loc.lat <= 23.8728, "lat {}", loc.lat);
            assert!(loc.lng >= 90.3315 && loc.lng <= 90.4485, "lng {}", loc.lng);
            assert!(DHAKA_BOUNDS.contains(loc.lat, loc.lng));
        }
    }

    #[test]
    fn test_orders_in_range() {
        for shop in seeded(1000, 3) {
            assert!((50..=300).contains(&shop.orders_last_30_days));
        }
    }

    #[test]
    fn test_address_round_trips_through_parser() {
        for shop in seeded(500, 4) {
            let parsed = parse_address(&shop.location.address)
                .unwrap_or_else(|| panic!("unparseable: {}", shop.location.address));
            assert!((1..=150).contains(&parsed.house));
            assert!((1..=32).contains(&parsed.road));
            assert_eq!(parsed.area, shop.location.name);
            assert_eq!(parsed.city, "Dhaka");
        }
    }

    #[test]
    fn test_name_is_prefix_category_suffix() {
        for shop in seeded(300, 5) {
            let prefix = SHOP_PREFIXES
                .iter()
                .find(|p| shop.name.starts_with(&format!("{} ", p)))
                .expect("known prefix");
            let suffix = SHOP_SUFFIXES
                .iter()
                .find(|s| shop.name.ends_with(&format!(" {}", s)))
                .expect("known suffix");
            let middle = &shop.name[prefix.len() + 1..shop.name.len() - suffix.len() - 1];
            assert!(SHOP_CATEGORIES.contains(&middle), "category {:?}", middle);
        }
    }

    #[test]
    fn test_area_is_known_label() {
        for shop in seeded(300, 6) {
            assert!(DHAKA_AREAS.contains(&shop.area()));
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        assert_eq!(seeded(50, 42), seeded(50, 42));
        assert_ne!(seeded(50, 42), seeded(50, 43));
    }

    #[test]
    fn test_large_batch_uses_many_areas() {
        let shops = seeded(2000, 7);
        let areas: std::collections::HashSet<_> = shops.iter().map(|s| s.area()).collect();
        assert_eq!(areas.len(), DHAKA_AREAS.len());
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("House #12, Road #5, Elephant Road, Dhaka"),
            Some(ParsedAddress {
                house: 12,
                road: 5,
                area: "Elephant Road".to_string(),
                city: "Dhaka".to_string(),
            })
        );
        assert_eq!(parse_address("Road #5, House #12, Gulshan, Dhaka"), None);
        assert_eq!(parse_address("House #x, Road #5, Gulshan, Dhaka"), None);
        assert_eq!(parse_address("House #1, Road #5, Gulshan"), None);
        assert_eq!(parse_address("House #1, Road #5, Gulshan, Dhaka, BD"), None);
    }
}
