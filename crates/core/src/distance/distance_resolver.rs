use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::distance_cache::DistanceCache;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Correction from straight-line to road distance
pub const ROAD_FACTOR: f64 = 1.3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSource {
    Cache,
    Computed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDistance {
    pub km: u32,
    pub source: DistanceSource,
}

/// Great-circle distance in kilometres.
pub fn haversine_km(origin: Coordinates, destination: Coordinates) -> f64 {
    let d_lat = (destination.latitude - origin.latitude).to_radians();
    let d_lon = (destination.longitude - origin.longitude).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + origin.latitude.to_radians().cos()
            * destination.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Haversine distance scaled by [`ROAD_FACTOR`], rounded to whole kilometres.
pub fn road_distance_km(origin: Coordinates, destination: Coordinates) -> u32 {
    (haversine_km(origin, destination) * ROAD_FACTOR).round() as u32
}

/// Resolves depot → locality road distances. Never writes back to the cache.
#[derive(Debug, Clone)]
pub struct DistanceResolver {
    cache: DistanceCache,
}

impl DistanceResolver {
    pub fn new(cache_entries: &HashMap<String, u32>, precision: usize) -> Self {
        let cache = DistanceCache::from_entries(cache_entries, precision);
        debug!(
            "Distance cache ready: {} entries at {} decimal places",
            cache.len(),
            precision
        );
        Self { cache }
    }

    pub fn with_cache(cache: DistanceCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &DistanceCache {
        &self.cache
    }

    pub fn resolve(&self, origin: Coordinates, destination: Coordinates) -> ResolvedDistance {
        match self.cache.get(origin, destination) {
            Some(km) => ResolvedDistance {
                km,
                source: DistanceSource::Cache,
            },
            None => ResolvedDistance {
                km: road_distance_km(origin, destination),
                source: DistanceSource::Computed,
            },
        }
    }

    /// Kilometres between two coordinate pairs, cache first.
    pub fn resolve_distance(
        &self,
        origin_lat: f64,
        origin_lon: f64,
        dest_lat: f64,
        dest_lon: f64,
    ) -> u32 {
        self.resolve(
            Coordinates::new(origin_lat, origin_lon),
            Coordinates::new(dest_lat, dest_lon),
        )
        .km
    }
}
