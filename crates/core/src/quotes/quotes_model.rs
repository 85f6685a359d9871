//! Quote domain models.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::quotes_constants::{QUOTE_VALIDITY_HOURS, SHIPMENT_TYPE_STANDARD};
use crate::distance::ResolvedDistance;
use crate::errors::{Error, ValidationError};
use crate::pricing::PriceBreakdown;
use crate::reference::Depot;

fn not_a_number() -> f64 {
    f64::NAN
}

/// Optional customer details captured with the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Input for a quote submission, as completed on the calculator form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Depot identifier, or its display name for older clients
    #[serde(default)]
    pub depot: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub cargo_type: String,
    /// Items, kilograms or cubic metres depending on the cargo type
    #[serde(default = "not_a_number")]
    pub quantity: f64,
    #[serde(default)]
    pub tax_included: bool,
    #[serde(default)]
    pub insured: bool,
    /// Required only when `insured` is set
    #[serde(default)]
    pub declared_value: Option<f64>,
    #[serde(default)]
    pub contact: Option<CustomerContact>,
}

impl QuoteRequest {
    /// Names of required fields that are empty or not a number.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("depot", &self.depot),
            ("zone", &self.zone),
            ("locality", &self.locality),
            ("cargoType", &self.cargo_type),
        ] {
            if value.trim().is_empty() {
                missing.push(name.to_string());
            }
        }
        if self.quantity.is_nan() {
            missing.push("quantity".to_string());
        }
        if self.insured && self.declared_value.map_or(true, f64::is_nan) {
            missing.push("declaredValue".to_string());
        }
        missing
    }

    /// "LOCALITY (Zone N)"
    pub fn destination_label(&self) -> String {
        format!("{} (Zone {})", self.locality, self.zone)
    }
}

/// Result of validation and pricing, before an identifier is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCalculation {
    pub depot: Depot,
    pub destination: String,
    pub distance: ResolvedDistance,
    pub breakdown: PriceBreakdown,
}

impl QuoteCalculation {
    pub fn price(&self) -> i64 {
        self.breakdown.total
    }
}

/// A priced, identified quote. Returned to the caller as soon as pricing
/// finishes, whatever happens to persistence afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteComputed {
    pub quote_id: String,
    pub origin_depot_id: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: u32,
    pub price: i64,
    pub delivery_estimate: String,
    pub created_at: DateTime<Utc>,
    /// Advisory only; nothing in the engine enforces it
    pub valid_until: DateTime<Utc>,
    pub request: QuoteRequest,
}

impl QuoteComputed {
    pub fn validity_window(created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Duration::hours(QUOTE_VALIDITY_HOURS)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.valid_until
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Sent,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Sent => "sent",
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(QuoteStatus::Pending),
            "sent" => Ok(QuoteStatus::Sent),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown quote status '{}'",
                other
            )))),
        }
    }
}

/// Cargo details stored as a nested document with the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDetails {
    pub cargo_type: String,
    pub quantity: f64,
    pub tax_included: bool,
    pub insured: bool,
    pub declared_value: f64,
}

/// Shape handed to the quote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub quote_reference: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub details: QuoteDetails,
    pub shipment_type: String,
    pub estimated_price: i64,
    pub estimated_time: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_company: Option<String>,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&QuoteComputed> for QuoteRecord {
    fn from(quote: &QuoteComputed) -> Self {
        let request = &quote.request;
        let contact = request.contact.clone().unwrap_or_default();
        Self {
            quote_reference: quote.quote_id.clone(),
            origin: quote.origin.clone(),
            destination: quote.destination.clone(),
            weight: request.quantity,
            details: QuoteDetails {
                cargo_type: request.cargo_type.clone(),
                quantity: request.quantity,
                tax_included: request.tax_included,
                insured: request.insured,
                declared_value: request.declared_value.unwrap_or(0.0),
            },
            shipment_type: SHIPMENT_TYPE_STANDARD.to_string(),
            estimated_price: quote.price,
            estimated_time: quote.delivery_estimate.clone(),
            customer_name: contact.name,
            customer_email: contact.email,
            customer_phone: contact.phone,
            customer_company: contact.company,
            status: QuoteStatus::Pending,
            created_at: quote.created_at,
        }
    }
}

/// Confirmation returned by the quote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuote {
    pub id: String,
    #[serde(flatten)]
    pub record: QuoteRecord,
}
