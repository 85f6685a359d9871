use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Selectable zones, in display order.
pub const ZONES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Margin factor used when the parameter table carries none
pub const DEFAULT_MARGIN_FACTOR: Decimal = dec!(0.4286);

/// Value-added tax applied when the quote includes tax
pub const TAX_RATE: Decimal = dec!(0.21);

/// Cargo insurance, as a fraction of the declared value
pub const INSURANCE_RATE: Decimal = dec!(0.008);

/// Distance above which the long-haul surcharge kicks in (km)
pub const LONG_HAUL_THRESHOLD_KM: u32 = 1000;

/// Surcharge per kilometre beyond the long-haul threshold
pub const LONG_HAUL_FACTOR_PER_KM: Decimal = dec!(0.0002);

/// Cargo type charged as a flat rate regardless of quantity
pub const CARGO_TYPE_MINIMUM_PARCEL: &str = "BULTO MINIMO (MAXIMO 20 KG)";
