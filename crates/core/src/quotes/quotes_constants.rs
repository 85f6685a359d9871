/// Prefix of generated quote identifiers
pub const QUOTE_ID_PREFIX: &str = "COT";

/// Upper bound (exclusive) of the random quote id suffix
pub const QUOTE_ID_RANDOM_BOUND: u16 = 1000;

/// Delivery window shown with every quote, in days
pub const DELIVERY_ESTIMATE_DAYS: &str = "2-5";

/// Advisory validity of a quote
pub const QUOTE_VALIDITY_HOURS: i64 = 48;

/// Shipment type recorded with every stored quote
pub const SHIPMENT_TYPE_STANDARD: &str = "standard";
