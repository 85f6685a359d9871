//! Distance resolution between a depot and a destination locality.
//!
//! A precomputed road-distance cache is consulted first; on a miss the
//! great-circle distance is corrected by a fixed road factor.

mod distance_cache;
mod distance_resolver;

pub use distance_cache::{
    canonical_key, DistanceCache, DEFAULT_CACHE_PRECISION, MAX_CACHE_PRECISION,
};
pub use distance_resolver::{
    haversine_km, road_distance_km, Coordinates, DistanceResolver, DistanceSource,
    ResolvedDistance, EARTH_RADIUS_KM, ROAD_FACTOR,
};
