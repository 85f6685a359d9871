//! Pricing domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CARGO_TYPE_MINIMUM_PARCEL, DEFAULT_MARGIN_FACTOR, INSURANCE_RATE, LONG_HAUL_FACTOR_PER_KM,
    LONG_HAUL_THRESHOLD_KM, TAX_RATE,
};

/// Constants of the price formula.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingParameters {
    pub margin_factor: Decimal,
    pub tax_rate: Decimal,
    pub insurance_rate: Decimal,
    pub long_haul_threshold_km: u32,
    pub long_haul_factor_per_km: Decimal,
    /// Cargo type charged flat, regardless of quantity
    pub flat_rate_cargo_type: String,
}

impl PricingParameters {
    pub fn with_margin(margin_factor: Decimal) -> Self {
        Self {
            margin_factor,
            ..Self::default()
        }
    }
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            margin_factor: DEFAULT_MARGIN_FACTOR,
            tax_rate: TAX_RATE,
            insurance_rate: INSURANCE_RATE,
            long_haul_threshold_km: LONG_HAUL_THRESHOLD_KM,
            long_haul_factor_per_km: LONG_HAUL_FACTOR_PER_KM,
            flat_rate_cargo_type: CARGO_TYPE_MINIMUM_PARCEL.to_string(),
        }
    }
}

/// Everything the price formula needs.
///
/// `quantity` and `declared_value` stay `f64` so hosts can hand over
/// unparsed form input; NaN makes the price unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub cargo_type: String,
    pub distance_km: u32,
    pub zone: String,
    pub locality: String,
    pub tax_included: bool,
    pub insured: bool,
    pub quantity: f64,
    pub declared_value: f64,
}

/// Intermediate amounts of one price computation. Only `total` is rounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_rate: Decimal,
    pub with_margin: Decimal,
    pub with_long_haul: Decimal,
    pub with_quantity: Decimal,
    pub with_tax: Decimal,
    pub insurance: Decimal,
    pub unrounded_total: Decimal,
    pub total: i64,
}
