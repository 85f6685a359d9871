use super::reference_model::{CargoBand, QuantityRange};
use crate::constants::CARGO_TYPE_MINIMUM_PARCEL;

/// Cargo types offered by the calculator, with the quantities each accepts.
///
/// Weight bands count kilograms; the cubic-metre bands count m³.
pub const STANDARD_CARGO_BANDS: [(&str, QuantityRange); 12] = [
    (CARGO_TYPE_MINIMUM_PARCEL, QuantityRange::new(1, Some(20))),
    ("DE 21 KG A 100 KG", QuantityRange::new(21, Some(100))),
    ("DE 101 KG A 300 KG", QuantityRange::new(101, Some(300))),
    ("DE 301 KG A 500 KG", QuantityRange::new(301, Some(500))),
    ("DE 501 KG A 1000 KG", QuantityRange::new(501, Some(1000))),
    ("DE 1001 KG A 1500 KG", QuantityRange::new(1001, Some(1500))),
    ("DE 1501 KG A 2000 KG", QuantityRange::new(1501, Some(2000))),
    ("DE 2001 KG A 2500 KG", QuantityRange::new(2001, Some(2500))),
    ("DE 2501 KG A 3000 KG", QuantityRange::new(2501, Some(3000))),
    ("DE 3001 KG EN ADELANTE", QuantityRange::new(3001, None)),
    ("METROS CUBICOS", QuantityRange::new(1, None)),
    ("METROS CUBICOS MUDANZA", QuantityRange::new(1, None)),
];

/// Quantity bands per cargo type. Used for input validation only.
#[derive(Debug, Clone)]
pub struct CargoBands {
    bands: Vec<CargoBand>,
}

impl CargoBands {
    pub fn standard() -> Self {
        Self {
            bands: STANDARD_CARGO_BANDS
                .iter()
                .map(|(label, range)| CargoBand {
                    label: label.to_string(),
                    range: *range,
                })
                .collect(),
        }
    }

    pub fn bands(&self) -> &[CargoBand] {
        &self.bands
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bands.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn is_known(&self, label: &str) -> bool {
        self.bands.iter().any(|b| b.label == label)
    }

    /// Range for a label. Unknown labels accept `[1, ∞)`.
    pub fn range_for(&self, label: &str) -> QuantityRange {
        self.bands
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.range)
            .unwrap_or_else(QuantityRange::unbounded)
    }

    /// Quantity the form resets to when a cargo type is picked.
    pub fn default_quantity(&self, label: &str) -> u32 {
        if label.is_empty() {
            return 1;
        }
        self.range_for(label).min
    }

    /// Returns the offending range when `quantity` falls outside the band.
    pub fn check_quantity(&self, label: &str, quantity: f64) -> Result<(), QuantityRange> {
        let range = self.range_for(label);
        if range.contains(quantity) {
            Ok(())
        } else {
            Err(range)
        }
    }
}

impl Default for CargoBands {
    fn default() -> Self {
        Self::standard()
    }
}
