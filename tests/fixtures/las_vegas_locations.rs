//! Real Las Vegas / Henderson locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Location ids are assigned by the
//! fixture: warehouses use 1..=9, customers start at 100.

use route_optimizer::LocationRef;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn to_ref(&self, location_id: i64) -> LocationRef {
        LocationRef {
            location_id,
            address: self.name.to_string(),
            latitude: self.lat,
            longitude: self.lng,
        }
    }
}

// ============================================================================
// Warehouses (depot candidates)
// ============================================================================

pub const WAREHOUSES: &[Location] = &[
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
];

// ============================================================================
// Customers
// ============================================================================

pub const STRIP_CUSTOMERS: &[Location] = &[
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("SW Steakhouse", 36.1262145, -115.1669146),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Location::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Location::new("Hash House A Go Go", 36.1181377, -115.1710989),
    Location::new("Strip Steak", 36.0908722, -115.1776176),
];

pub const HENDERSON_CUSTOMERS: &[Location] = &[
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Naga", 36.0137634, -114.9928676),
    Location::new("RibCage", 35.9949754, -115.0999810),
    Location::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
];

pub const NORTH_CUSTOMERS: &[Location] = &[
    Location::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Location::new("Monarca Mexican Restaurant", 36.1440711, -115.0634197),
    Location::new("La Costa del Sol", 36.1470458, -115.0644345),
    Location::new("Beers and Bets", 36.1428945, -115.1573836),
];

pub const SOUTH_CUSTOMERS: &[Location] = &[
    Location::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Location::new("Denny's South", 36.0591086, -115.1717250),
    Location::new("kabuki Japanese", 36.0675472, -115.1779391),
    Location::new("Mikos Izakaya", 36.0429503, -115.1527627),
    Location::new("Budget Suites South", 36.0366259, -115.1713361),
];

/// Returns all customer locations.
pub fn all_customers() -> Vec<Location> {
    let mut all = Vec::with_capacity(32);
    all.extend_from_slice(STRIP_CUSTOMERS);
    all.extend_from_slice(HENDERSON_CUSTOMERS);
    all.extend_from_slice(NORTH_CUSTOMERS);
    all.extend_from_slice(SOUTH_CUSTOMERS);
    all
}

/// Returns a subset of customers for smaller tests.
pub fn sample_customers(count: usize) -> Vec<Location> {
    all_customers().into_iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_vegas_area() {
        for loc in all_customers().iter().chain(WAREHOUSES) {
            assert!(loc.lat > 35.9 && loc.lat < 36.3, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(
                loc.lng > -115.4 && loc.lng < -114.8,
                "{} lng out of range: {}",
                loc.name,
                loc.lng
            );
        }
    }
}
