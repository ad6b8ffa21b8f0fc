//! Fixed word lists and bounds for shop generation

use std::ops::RangeInclusive;

use shared::models::GeoBounds;

/// Dhaka city approximate bounds
pub const DHAKA_BOUNDS: GeoBounds = GeoBounds {
    north: 23.8728,
    south: 23.6850,
    east: 90.4485,
    west: 90.3315,
};

/// City name embedded in every generated address
pub const DHAKA_CITY: &str = "Dhaka";

/// Area labels used for shop locations and the area dropdown
pub const DHAKA_AREAS: &[&str] = &[
    "Gulshan",
    "Banani",
    "Dhanmondi",
    "Uttara",
    "Mirpur",
    "Mohakhali",
    "Bashundhara",
    "Motijheel",
    "Khilgaon",
    "Rampura",
    "Badda",
    "Mohammadpur",
    "Tejgaon",
    "Farmgate",
    "Kakrail",
    "Malibagh",
    "Niketon",
    "Baridhara",
    "Paltan",
    "Shahbag",
    "Elephant Road",
    "New Market",
    "Wari",
    "Jatrabari",
];

pub const SHOP_PREFIXES: &[&str] = &[
    "Royal", "Star", "Golden", "Silver", "Diamond", "Premium", "Luxury", "Elite", "Metro", "City",
];

pub const SHOP_CATEGORIES: &[&str] = &[
    "Grocery Store",
    "Pharmacy",
    "Restaurant",
    "Cafe",
    "Electronics Shop",
    "Clothing Store",
    "Bakery",
    "Supermarket",
    "Mobile Shop",
    "Book Store",
    "Hardware Store",
    "Beauty Salon",
    "Gift Shop",
    "Jewelry Store",
    "Shoe Store",
];

pub const SHOP_SUFFIXES: &[&str] = &[
    "Mart", "Shop", "Store", "Point", "Center", "Zone", "Hub", "Gallery", "Express", "Place",
];

pub const HOUSE_NUMBERS: RangeInclusive<u32> = 1..=150;
pub const ROAD_NUMBERS: RangeInclusive<u32> = 1..=32;
pub const MONTHLY_ORDERS: RangeInclusive<u32> = 50..=300;

/// Everything the shop generator draws from
#[derive(Debug, Clone)]
pub struct ShopCatalog {
    pub bounds: GeoBounds,
    pub city: &'static str,
    pub areas: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub categories: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub house_numbers: RangeInclusive<u32>,
    pub road_numbers: RangeInclusive<u32>,
    pub monthly_orders: RangeInclusive<u32>,
}

impl ShopCatalog {
    pub const fn dhaka() -> Self {
        Self {
            bounds: DHAKA_BOUNDS,
            city: DHAKA_CITY,
            areas: DHAKA_AREAS,
            prefixes: SHOP_PREFIXES,
            categories: SHOP_CATEGORIES,
            suffixes: SHOP_SUFFIXES,
            house_numbers: HOUSE_NUMBERS,
            road_numbers: ROAD_NUMBERS,
            monthly_orders: MONTHLY_ORDERS,
        }
    }
}

impl Default for ShopCatalog {
    fn default() -> Self {
        Self::dhaka()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_word_lists_are_unique() {
        for list in [DHAKA_AREAS, SHOP_PREFIXES, SHOP_CATEGORIES, SHOP_SUFFIXES] {
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
        assert_eq!(DHAKA_AREAS.len(), 24);
        assert_eq!(SHOP_CATEGORIES.len(), 15);
    }

    #[test]
    fn test_area_labels_have_no_commas() {
        // Addresses are comma separated; an area with a comma would break parsing
        assert!(DHAKA_AREAS.iter().all(|a| !a.contains(',')));
    }

    #[test]
    fn test_bounds_are_ordered() {
        assert!(DHAKA_BOUNDS.south < DHAKA_BOUNDS.north);
        assert!(DHAKA_BOUNDS.west < DHAKA_BOUNDS.east);
    }
}
