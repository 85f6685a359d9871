use std::collections::HashMap;

use log::warn;

use super::distance_resolver::Coordinates;

/// Decimal places coordinates are rounded to when building cache keys.
pub const DEFAULT_CACHE_PRECISION: usize = 6;

/// Largest precision at which `10^precision` and the scaled coordinates stay
/// finite and exact enough to round.
pub const MAX_CACHE_PRECISION: usize = 15;

fn format_coordinate(value: f64, precision: usize) -> String {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid "-0.000000" and "0.000000" producing different keys
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", precision, rounded)
}

/// Key for a directed origin → destination pair.
///
/// Order is fixed (origin lat, origin lon, destination lat, destination lon),
/// so a cached A → B entry never answers a B → A lookup.
pub fn canonical_key(origin: Coordinates, destination: Coordinates, precision: usize) -> String {
    [
        origin.latitude,
        origin.longitude,
        destination.latitude,
        destination.longitude,
    ]
    .iter()
    .map(|v| format_coordinate(*v, precision))
    .collect::<Vec<_>>()
    .join(",")
}

fn parse_raw_key(raw: &str) -> Option<(Coordinates, Coordinates)> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;
    match parts.as_slice() {
        [olat, olon, dlat, dlon] => Some((
            Coordinates::new(*olat, *olon),
            Coordinates::new(*dlat, *dlon),
        )),
        _ => None,
    }
}

/// Read-only road distance cache keyed by canonicalised coordinate pairs.
#[derive(Debug, Clone, Default)]
pub struct DistanceCache {
    precision: usize,
    entries: HashMap<String, u32>,
}

impl DistanceCache {
    /// Re-keys the raw `"lat,lon,lat,lon" -> km` entries at `precision`.
    ///
    /// Unparseable keys are skipped. When two raw keys collapse into one
    /// canonical key the lexicographically first raw key wins. Precision is
    /// capped at [`MAX_CACHE_PRECISION`].
    pub fn from_entries(raw: &HashMap<String, u32>, precision: usize) -> Self {
        if precision > MAX_CACHE_PRECISION {
            warn!(
                "Distance cache precision {} capped at {}",
                precision, MAX_CACHE_PRECISION
            );
        }
        let precision = precision.min(MAX_CACHE_PRECISION);
        let mut raw_keys: Vec<&String> = raw.keys().collect();
        raw_keys.sort();

        let mut entries = HashMap::with_capacity(raw.len());
        for raw_key in raw_keys {
            let Some((origin, destination)) = parse_raw_key(raw_key) else {
                warn!("Skipping malformed distance cache key '{}'", raw_key);
                continue;
            };
            let key = canonical_key(origin, destination, precision);
            if entries.contains_key(&key) {
                warn!(
                    "Distance cache key '{}' collides with an earlier entry at precision {}",
                    raw_key, precision
                );
                continue;
            }
            entries.insert(key, raw[raw_key]);
        }

        Self { precision, entries }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, origin: Coordinates, destination: Coordinates) -> Option<u32> {
        self.entries
            .get(&canonical_key(origin, destination, self.precision))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_canonical_key_fixed_precision() {
        let key = canonical_key(
            Coordinates::new(-24.1857, -65.2995),
            Coordinates::new(-24.79137674950297, -65.41599201442627),
            6,
        );
        assert_eq!(key, "-24.185700,-65.299500,-24.791377,-65.415992");
    }

    #[test]
    fn test_canonical_key_normalises_negative_zero() {
        let key = canonical_key(
            Coordinates::new(-0.0000001, 0.0),
            Coordinates::new(0.0, -0.0),
            3,
        );
        assert_eq!(key, "0.000,0.000,0.000,0.000");
    }

    #[test]
    fn test_lookup_tolerates_representation_differences() {
        let cache = DistanceCache::from_entries(&raw(&[("-24.1857,-65.2995,-23.5766,-65.3932", 85)]), 6);
        assert_eq!(
            cache.get(
                Coordinates::new(-24.18570000000001, -65.2995),
                Coordinates::new(-23.5766, -65.3932)
            ),
            Some(85)
        );
    }

    #[test]
    fn test_lookup_is_directional() {
        let cache = DistanceCache::from_entries(&raw(&[("1,2,3,4", 10)]), 6);
        assert_eq!(
            cache.get(Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0)),
            Some(10)
        );
        assert_eq!(
            cache.get(Coordinates::new(3.0, 4.0), Coordinates::new(1.0, 2.0)),
            None
        );
    }

    #[test]
    fn test_malformed_keys_are_skipped() {
        let cache = DistanceCache::from_entries(
            &raw(&[("1,2,3", 10), ("a,b,c,d", 11), ("1,2,3,4", 12)]),
            6,
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_colliding_keys_keep_first() {
        let cache = DistanceCache::from_entries(&raw(&[("1.0001,2,3,4", 20), ("1.0002,2,3,4", 30)]), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get(Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0)),
            Some(20)
        );
    }

    #[test]
    fn test_oversized_precision_is_capped() {
        let cache = DistanceCache::from_entries(&raw(&[("1,2,3,4", 10), ("5,6,7,8", 50)]), 400);
        assert_eq!(cache.precision(), MAX_CACHE_PRECISION);
        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.get(Coordinates::new(5.0, 6.0), Coordinates::new(7.0, 8.0)),
            Some(50)
        );
    }
}
