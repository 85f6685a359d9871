use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::cargo_bands::CargoBands;
use super::localities::LocalityTable;
use super::reference_errors::ReferenceDataError;
use super::reference_model::{Depot, DepotList, Locality, ParameterRow};
use crate::constants::DEFAULT_MARGIN_FACTOR;
use crate::errors::Result;
use crate::pricing::RateTable;

pub const DEPOTS_FILE: &str = "depots.json";
pub const PARAMETERS_FILE: &str = "parameters.json";
pub const DISTANCE_CACHE_FILE: &str = "distance_cache.json";

pub const BUNDLED_DEPOTS_JSON: &str = include_str!("../../data/depots.json");
pub const BUNDLED_PARAMETERS_JSON: &str = include_str!("../../data/parameters.json");
pub const BUNDLED_DISTANCE_CACHE_JSON: &str = include_str!("../../data/distance_cache.json");

/// Immutable lookup tables the pricing engine runs against.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    depots: Vec<Depot>,
    parameters: Vec<ParameterRow>,
    distance_cache: HashMap<String, u32>,
    localities: LocalityTable,
    cargo_bands: CargoBands,
    rate_table: RateTable,
}

impl ReferenceData {
    /// Builds reference data from the three JSON documents plus the built-in
    /// locality, band and rate tables.
    pub fn from_json(depots_json: &str, parameters_json: &str, cache_json: &str) -> Result<Self> {
        let depot_list: DepotList = serde_json::from_str(depots_json)
            .map_err(|e| ReferenceDataError::malformed(DEPOTS_FILE, e))?;
        let parameters: Vec<ParameterRow> = serde_json::from_str(parameters_json)
            .map_err(|e| ReferenceDataError::malformed(PARAMETERS_FILE, e))?;
        let distance_cache: HashMap<String, u32> = serde_json::from_str(cache_json)
            .map_err(|e| ReferenceDataError::malformed(DISTANCE_CACHE_FILE, e))?;

        let depots: Vec<Depot> = depot_list.depots.into_iter().map(Depot::from).collect();
        if depots.is_empty() {
            return Err(ReferenceDataError::NoDepots.into());
        }
        let mut seen = HashSet::new();
        for depot in &depots {
            if !seen.insert(depot.id.as_str()) {
                return Err(ReferenceDataError::DuplicateDepotId(depot.id.clone()).into());
            }
        }

        debug!(
            "Loaded {} depots, {} parameter rows, {} cached distances",
            depots.len(),
            parameters.len(),
            distance_cache.len()
        );

        Ok(Self {
            depots,
            parameters,
            distance_cache,
            localities: LocalityTable::standard(),
            cargo_bands: CargoBands::standard(),
            rate_table: RateTable::standard(),
        })
    }

    /// Reference data compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(
            BUNDLED_DEPOTS_JSON,
            BUNDLED_PARAMETERS_JSON,
            BUNDLED_DISTANCE_CACHE_JSON,
        )
    }

    /// Loads the three documents from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        info!("Loading reference data from {}", dir.display());
        let read = |file: &str| {
            fs::read_to_string(dir.join(file))
                .map_err(|e| ReferenceDataError::Io(format!("{}: {}", file, e)))
        };
        Self::from_json(
            &read(DEPOTS_FILE)?,
            &read(PARAMETERS_FILE)?,
            &read(DISTANCE_CACHE_FILE)?,
        )
    }

    /// Replaces the built-in rate table.
    pub fn with_rate_table(mut self, rate_table: RateTable) -> Self {
        self.rate_table = rate_table;
        self
    }

    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    pub fn find_depot(&self, id: &str) -> Option<&Depot> {
        self.depots.iter().find(|d| d.id == id)
    }

    /// Compatibility lookup by display name. Names are not unique; the first
    /// depot in document order wins.
    pub fn find_depot_by_name(&self, name: &str) -> Option<&Depot> {
        let mut matches = self.depots.iter().filter(|d| d.name == name);
        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            warn!("Depot name '{}' is ambiguous, using the first match", name);
        }
        first
    }

    /// Resolves a depot reference: identifier first, then display name.
    pub fn resolve_depot(&self, reference: &str) -> Option<&Depot> {
        self.find_depot(reference)
            .or_else(|| self.find_depot_by_name(reference))
    }

    pub fn parameters(&self) -> &[ParameterRow] {
        &self.parameters
    }

    /// Margin from the first parameter row. Missing, zero or unrepresentable
    /// values fall back to the default.
    pub fn margin_factor(&self) -> Decimal {
        self.parameters
            .first()
            .map(|row| row.margin)
            .filter(|margin| *margin != 0.0)
            .and_then(Decimal::from_f64)
            .unwrap_or(DEFAULT_MARGIN_FACTOR)
    }

    pub fn distance_cache_entries(&self) -> &HashMap<String, u32> {
        &self.distance_cache
    }

    pub fn zones(&self) -> Vec<&str> {
        self.localities.zones()
    }

    pub fn localities(&self, zone: &str) -> &[Locality] {
        self.localities.in_zone(zone)
    }

    pub fn find_locality(&self, zone: &str, name: &str) -> Option<&Locality> {
        self.localities.find(zone, name)
    }

    pub fn cargo_bands(&self) -> &CargoBands {
        &self.cargo_bands
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }
}
