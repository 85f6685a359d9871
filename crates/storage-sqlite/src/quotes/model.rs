//! Database model for stored quotes.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use freightquote_core::quotes::{QuoteDetails, QuoteRecord, QuoteStatus, StoredQuote};

use crate::errors::StorageError;

/// Database model for quotes. `details` holds the JSON-encoded cargo details.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct QuoteDB {
    pub id: String,
    pub quote_reference: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub details: String,
    pub shipment_type: String,
    pub estimated_price: i64,
    pub estimated_time: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_company: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl QuoteDB {
    /// Row for a new record. The stored status always starts as pending.
    pub fn new_row(id: String, record: &QuoteRecord) -> Result<Self, StorageError> {
        Ok(Self {
            id,
            quote_reference: record.quote_reference.clone(),
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            weight: record.weight,
            details: serde_json::to_string(&record.details)?,
            shipment_type: record.shipment_type.clone(),
            estimated_price: record.estimated_price,
            estimated_time: record.estimated_time.clone(),
            customer_name: record.customer_name.clone(),
            customer_email: record.customer_email.clone(),
            customer_phone: record.customer_phone.clone(),
            customer_company: record.customer_company.clone(),
            status: QuoteStatus::Pending.as_str().to_string(),
            created_at: record.created_at.naive_utc(),
        })
    }
}

impl TryFrom<QuoteDB> for StoredQuote {
    type Error = freightquote_core::Error;

    fn try_from(db: QuoteDB) -> Result<Self, Self::Error> {
        let details: QuoteDetails =
            serde_json::from_str(&db.details).map_err(StorageError::from)?;
        let status: QuoteStatus = db.status.parse()?;
        Ok(StoredQuote {
            id: db.id,
            record: QuoteRecord {
                quote_reference: db.quote_reference,
                origin: db.origin,
                destination: db.destination,
                weight: db.weight,
                details,
                shipment_type: db.shipment_type,
                estimated_price: db.estimated_price,
                estimated_time: db.estimated_time,
                customer_name: db.customer_name,
                customer_email: db.customer_email,
                customer_phone: db.customer_phone,
                customer_company: db.customer_company,
                status,
                created_at: db.created_at.and_utc(),
            },
        })
    }
}
