//! Geometric travel matrices for requests without a routing engine.
//!
//! Straight-line estimates ignore roads, so they are only as good as the
//! assumed travel-time multiplier. Matrices are laid out in solver node
//! order when built through [`attach_matrices`].

use crate::model::{LocationRef, OptimizeRouteRequest};
use crate::nodes::locations_in_node_order;
use crate::traits::TravelMatrixProvider;

/// Kilometres per degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Minutes per kilometre when nothing better is known (30 km/h).
const DEFAULT_MINUTES_PER_KM: f64 = 2.0;

/// Integer distance (km) and travel-time (minutes) matrices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TravelMatrices {
    pub distance_km: Vec<Vec<i64>>,
    pub travel_minutes: Vec<Vec<i64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// `km_per_degree * (|Δlat| + |Δlng|)`.
    DegreeManhattan,
    /// Great-circle distance.
    Haversine,
}

/// Matrix provider estimating distances from coordinates.
#[derive(Debug, Clone)]
pub struct ApproxMatrix {
    pub metric: DistanceMetric,
    pub km_per_degree: f64,
    /// Travel minutes per kilometre.
    pub minutes_per_km: f64,
}

impl Default for ApproxMatrix {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::DegreeManhattan,
            km_per_degree: KM_PER_DEGREE,
            minutes_per_km: DEFAULT_MINUTES_PER_KM,
        }
    }
}

impl ApproxMatrix {
    pub fn new(metric: DistanceMetric, minutes_per_km: f64) -> Self {
        Self {
            metric,
            minutes_per_km,
            ..Self::default()
        }
    }

    /// Calculate haversine distance between two points in kilometers.
    fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    fn km_between(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        match self.metric {
            DistanceMetric::DegreeManhattan => {
                self.km_per_degree * ((from.0 - to.0).abs() + (from.1 - to.1).abs())
            }
            DistanceMetric::Haversine => Self::haversine_km(from, to),
        }
    }
}

impl TravelMatrixProvider for ApproxMatrix {
    fn matrices_for(&self, locations: &[&LocationRef]) -> TravelMatrices {
        let n = locations.len();
        let mut distance_km = vec![vec![0; n]; n];
        let mut travel_minutes = vec![vec![0; n]; n];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }
                let km = self.km_between(from.coords(), to.coords());
                distance_km[i][j] = km.round() as i64;
                travel_minutes[i][j] = (km * self.minutes_per_km).round() as i64;
            }
        }

        TravelMatrices {
            distance_km,
            travel_minutes,
        }
    }
}

/// Replaces the request's matrices with ones built in solver node order.
pub fn attach_matrices<P: TravelMatrixProvider>(provider: &P, request: &mut OptimizeRouteRequest) {
    let matrices = {
        let locations = locations_in_node_order(&request.vehicles, &request.stops);
        provider.matrices_for(&locations)
    };
    request.distance_matrix = matrices.distance_km;
    request.travel_time_matrix = matrices.travel_minutes;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_between_identical_points() {
        let bellagio = (36.1126, -115.1767);
        assert!(ApproxMatrix::haversine_km(bellagio, bellagio).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_along_the_strip() {
        // Wynn to MGM Grand, about 2.7 km due south
        let wynn = (36.1263781, -115.1658180);
        let mgm_grand = (36.1023654, -115.1688720);
        let dist = ApproxMatrix::haversine_km(wynn, mgm_grand);
        assert!(dist > 2.5 && dist < 2.9, "got {dist}");
        assert!((dist - ApproxMatrix::haversine_km(mgm_grand, wynn)).abs() < 1e-9);
    }

    #[test]
    fn test_degree_manhattan_distance() {
        let provider = ApproxMatrix::default();
        let a = LocationRef::new(1, 0.0, 0.0);
        let b = LocationRef::new(2, 0.1, 0.05);
        let matrices = provider.matrices_for(&[&a, &b]);

        // 111.32 * 0.15 = 16.7 km, 33.4 minutes
        assert_eq!(matrices.distance_km[0][1], 17);
        assert_eq!(matrices.travel_minutes[0][1], 33);
        assert_eq!(matrices.distance_km[1][0], 17);
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let provider = ApproxMatrix::new(DistanceMetric::Haversine, 1.5);
        let locations = [
            LocationRef::new(1, 36.1, -115.1),
            LocationRef::new(2, 36.2, -115.2),
            LocationRef::new(3, 36.3, -115.3),
        ];
        let refs: Vec<&LocationRef> = locations.iter().collect();
        let matrices = provider.matrices_for(&refs);

        for i in 0..locations.len() {
            assert_eq!(matrices.distance_km[i][i], 0, "Diagonal should be zero");
            assert_eq!(matrices.travel_minutes[i][i], 0, "Diagonal should be zero");
        }
        assert_eq!(matrices.travel_minutes[0][1], matrices.travel_minutes[1][0]);
    }
}
