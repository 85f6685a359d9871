//! Reference data module - depots, localities, cargo bands and pricing parameters.
//!
//! Everything here is loaded once at startup and never mutated afterwards.
//! Services receive it behind an `Arc<ReferenceData>`.

mod cargo_bands;
mod localities;
mod reference_data;
mod reference_errors;
mod reference_model;

#[cfg(test)]
mod reference_data_tests;

pub use cargo_bands::{CargoBands, STANDARD_CARGO_BANDS};
pub use localities::LocalityTable;
pub use reference_data::{
    ReferenceData, BUNDLED_DEPOTS_JSON, BUNDLED_DISTANCE_CACHE_JSON, BUNDLED_PARAMETERS_JSON,
    DEPOTS_FILE, DISTANCE_CACHE_FILE, PARAMETERS_FILE,
};
pub use reference_errors::ReferenceDataError;
pub use reference_model::{
    CargoBand, Depot, DepotList, DepotRecord, Locality, ParameterRow, QuantityRange,
};
