//! Reference data domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::distance::Coordinates;

/// A fixed origin location shipments depart from.
///
/// `id` is the stable key. `name` is a display field that is not guaranteed
/// to be unique across the depot list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Depot {
    pub id: String,
    pub name: String,
    pub address: String,
    pub admin_whatsapp: String,
    pub logistics_whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Cosmetic "new" badge
    pub is_new: bool,
}

impl Depot {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Depot row as it appears in the depot document.
#[derive(Debug, Clone, Deserialize)]
pub struct DepotRecord {
    #[serde(rename = "Id_Deposito")]
    pub id: String,
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Direccion", default)]
    pub address: String,
    #[serde(rename = "WhatsApp_Administracion_Casa_Central", default)]
    pub admin_whatsapp: String,
    #[serde(rename = "WhatsApp_Logistica_Casa_Central", default)]
    pub logistics_whatsapp: String,
    #[serde(rename = "Latitud")]
    pub latitude: f64,
    #[serde(rename = "Longitud")]
    pub longitude: f64,
    #[serde(rename = "Nueva", default)]
    pub is_new: Option<bool>,
}

/// Top-level shape of the depot document.
#[derive(Debug, Clone, Deserialize)]
pub struct DepotList {
    #[serde(rename = "Lista_de_Depositos")]
    pub depots: Vec<DepotRecord>,
}

impl From<DepotRecord> for Depot {
    fn from(record: DepotRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            address: record.address,
            admin_whatsapp: record.admin_whatsapp,
            logistics_whatsapp: record.logistics_whatsapp,
            latitude: record.latitude,
            longitude: record.longitude,
            is_new: record.is_new.unwrap_or(false),
        }
    }
}

/// One row of the pricing parameter document.
///
/// Only `margin` feeds the pricing formula; the fuel and per-km figures are
/// carried for operators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterRow {
    #[serde(rename = "Parametro")]
    pub name: String,
    #[serde(rename = "Valor", default)]
    pub value: f64,
    #[serde(rename = "Consumo_Combustible_Litros_Km", default)]
    pub fuel_litres_per_km: f64,
    #[serde(rename = "Precio_Combustible", default)]
    pub fuel_price: f64,
    #[serde(rename = "Costo_Km", default)]
    pub cost_per_km: f64,
    #[serde(rename = "Margen_Ganancia", default)]
    pub margin: f64,
}

/// A destination town within a zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Locality {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Locality {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Inclusive quantity range; `max == None` means unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuantityRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl QuantityRange {
    pub const fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Range applied to labels with no configured band.
    pub const fn unbounded() -> Self {
        Self { min: 1, max: None }
    }

    /// NaN is not rejected here; it is caught by the field check that follows.
    pub fn contains(&self, quantity: f64) -> bool {
        let below = quantity < f64::from(self.min);
        let above = self.max.is_some_and(|max| quantity > f64::from(max));
        !(below || above)
    }
}

impl fmt::Display for QuantityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{} and {}", self.min, max),
            None => write!(f, "{} and ∞", self.min),
        }
    }
}

/// A named shipment category and the quantities it accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CargoBand {
    pub label: String,
    pub range: QuantityRange,
}
