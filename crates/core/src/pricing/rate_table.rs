use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::CARGO_TYPE_MINIMUM_PARCEL;

/// Base rate per zone ("1".."4"), in currency units.
type ZoneRates = [Decimal; 4];

const STANDARD_RATES: [(&str, ZoneRates); 12] = [
    (
        CARGO_TYPE_MINIMUM_PARCEL,
        [dec!(26617.5), dec!(31941), dec!(37264.5), dec!(42588)],
    ),
    (
        "DE 21 KG A 100 KG",
        [dec!(395.816), dec!(562.884), dec!(638.183), dec!(1037.378)],
    ),
    (
        "DE 101 KG A 300 KG",
        [dec!(197.254), dec!(281.463), dec!(319.091), dec!(775.57)],
    ),
    (
        "DE 301 KG A 500 KG",
        [dec!(150.993), dec!(215.182), dec!(238.954), dec!(521.287)],
    ),
    (
        "DE 501 KG A 1000 KG",
        [dec!(145.164), dec!(206.924), dec!(228.651), dec!(371.747)],
    ),
    (
        "DE 1001 KG A 1500 KG",
        [dec!(139.397), dec!(198.618), dec!(220.034), dec!(357.62)],
    ),
    (
        "DE 1501 KG A 2000 KG",
        [dec!(99.916), dec!(156.886), dec!(166.024), dec!(311.152)],
    ),
    (
        "DE 2001 KG A 2500 KG",
        [dec!(95.817), dec!(137.603), dec!(159.672), dec!(278.102)],
    ),
    (
        "DE 2501 KG A 3000 KG",
        [dec!(93.189), dec!(133.046), dec!(154.237), dec!(259.104)],
    ),
    (
        "DE 3001 KG EN ADELANTE",
        [dec!(90.572), dec!(130.409), dec!(144.168), dec!(234.654)],
    ),
    (
        "METROS CUBICOS",
        [dec!(38697.296), dec!(48126.036), dec!(54994.396), dec!(90544.24)],
    ),
    (
        "METROS CUBICOS MUDANZA",
        [dec!(51873.957), dec!(63246.409), dec!(82080.874), dec!(149148.445)],
    ),
];

/// Sparse (cargo type, zone) → base rate table.
///
/// Keys use the same labels as the cargo bands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, HashMap<String, Decimal>>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The published rate card. Zone 5 is not priced.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for (cargo_type, zone_rates) in STANDARD_RATES {
            for (zone, rate) in ["1", "2", "3", "4"].into_iter().zip(zone_rates) {
                table.insert(cargo_type, zone, rate);
            }
        }
        table
    }

    pub fn insert(&mut self, cargo_type: &str, zone: &str, rate: Decimal) {
        self.rates
            .entry(cargo_type.to_string())
            .or_default()
            .insert(zone.to_string(), rate);
    }

    /// Strict lookup: `None` when either the cargo type or the zone is absent.
    pub fn lookup(&self, cargo_type: &str, zone: &str) -> Option<Decimal> {
        self.rates.get(cargo_type)?.get(zone).copied()
    }

    /// Base rate with the silent zero fallback for unpriced combinations.
    pub fn base_rate(&self, cargo_type: &str, zone: &str) -> Decimal {
        self.lookup(cargo_type, zone).unwrap_or(Decimal::ZERO)
    }

    pub fn cargo_types(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }
}
