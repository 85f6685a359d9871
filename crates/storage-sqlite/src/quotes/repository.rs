use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use freightquote_core::quotes::{QuoteRecord, QuoteStore, StoredQuote};
use freightquote_core::Result;

use super::model::QuoteDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::quotes;
use crate::schema::quotes::dsl::*;

/// Page size for [`QuoteRepository::list_recent`] when the caller gives none
pub const DEFAULT_RECENT_LIMIT: i64 = 50;

pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        QuoteRepository { pool, writer }
    }

    /// All stored quotes carrying `reference`, newest first. References are
    /// display ids, so more than one row can match.
    pub fn get_by_reference(&self, reference: &str) -> Result<Vec<StoredQuote>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = quotes
            .filter(quote_reference.eq(reference))
            .order(created_at.desc())
            .select(QuoteDB::as_select())
            .load::<QuoteDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(StoredQuote::try_from).collect()
    }

    pub fn list_recent(&self, limit: i64) -> Result<Vec<StoredQuote>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = quotes
            .order(created_at.desc())
            .limit(limit.max(0))
            .select(QuoteDB::as_select())
            .load::<QuoteDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(StoredQuote::try_from).collect()
    }
}

#[async_trait]
impl QuoteStore for QuoteRepository {
    async fn save(&self, record: &QuoteRecord) -> Result<StoredQuote> {
        let row = QuoteDB::new_row(Uuid::new_v4().to_string(), record)?;
        debug!("Saving quote {} as {}", row.quote_reference, row.id);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<StoredQuote> {
                let saved = diesel::insert_into(quotes::table)
                    .values(&row)
                    .returning(QuoteDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                StoredQuote::try_from(saved)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use chrono::{Duration, TimeZone, Utc};
    use freightquote_core::quotes::{QuoteDetails, QuoteStatus};
    use tempfile::tempdir;

    async fn create_test_repository() -> (QuoteRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("quotes.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer(&pool).expect("Failed to start writer");

        (QuoteRepository::new(pool, writer), temp_dir)
    }

    fn record(reference: &str, minutes_ago: i64) -> QuoteRecord {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
            - Duration::minutes(minutes_ago);
        QuoteRecord {
            quote_reference: reference.to_string(),
            origin: "CASA CENTRAL JUJUY".to_string(),
            destination: "SALTA (Zone 1)".to_string(),
            weight: 50.0,
            details: QuoteDetails {
                cargo_type: "DE 21 KG A 100 KG".to_string(),
                quantity: 50.0,
                tax_included: true,
                insured: false,
                declared_value: 0.0,
            },
            shipment_type: "standard".to_string(),
            estimated_price: 34210,
            estimated_time: "2-5".to_string(),
            customer_name: Some("Ana".to_string()),
            customer_email: None,
            customer_phone: None,
            customer_company: None,
            status: QuoteStatus::Sent,
            created_at: created,
        }
    }

    #[tokio::test]
    async fn test_save_round_trips_record_as_pending() {
        let (repo, _dir) = create_test_repository().await;

        let stored = repo.save(&record("COT-1-1", 0)).await.unwrap();
        assert!(Uuid::parse_str(&stored.id).is_ok());
        assert_eq!(stored.record.status, QuoteStatus::Pending);
        assert_eq!(stored.record.details.cargo_type, "DE 21 KG A 100 KG");
        assert!(stored.record.details.tax_included);
        assert_eq!(stored.record.customer_name.as_deref(), Some("Ana"));

        let found = repo.get_by_reference("COT-1-1").unwrap();
        assert_eq!(found, vec![stored]);
    }

    #[tokio::test]
    async fn test_duplicate_references_are_kept() {
        let (repo, _dir) = create_test_repository().await;

        let older = repo.save(&record("COT-7-7", 10)).await.unwrap();
        let newer = repo.save(&record("COT-7-7", 0)).await.unwrap();
        assert_ne!(older.id, newer.id);

        let found = repo.get_by_reference("COT-7-7").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, newer.id);
        assert!(repo.get_by_reference("COT-0-0").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_recent_is_newest_first_and_limited() {
        let (repo, _dir) = create_test_repository().await;
        for (i, minutes_ago) in [30, 10, 20].iter().enumerate() {
            repo.save(&record(&format!("COT-{i}-0"), *minutes_ago))
                .await
                .unwrap();
        }

        let recent = repo.list_recent(2).unwrap();
        let references: Vec<_> = recent
            .iter()
            .map(|q| q.record.quote_reference.as_str())
            .collect();
        assert_eq!(references, vec!["COT-1-0", "COT-2-0"]);
        assert!(repo.list_recent(0).unwrap().is_empty());
    }
}
