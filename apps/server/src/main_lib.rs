use std::sync::Arc;

use crate::{
    config::Config,
    events::{QuoteOutcomeStats, WebQuoteEventSink},
};
use freightquote_core::{
    quotes::{QuoteService, QuoteServiceOptions, QuoteServiceTrait, QuoteStore},
    ReferenceData,
};
use freightquote_storage_sqlite::{
    db::{self, write_actor},
    QuoteRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub reference: Arc<ReferenceData>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub quote_repository: Arc<QuoteRepository>,
    pub quote_stats: Arc<QuoteOutcomeStats>,
}

/// Installs the global subscriber. `log` records from the library crates are
/// forwarded to it. Calling it twice is harmless.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    };
    if let Err(e) = result {
        eprintln!("Tracing already initialised: {}", e);
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer(&pool)?;
    let quote_repository = Arc::new(QuoteRepository::new(pool.clone(), writer));

    let reference = match &config.reference_dir {
        Some(dir) => ReferenceData::from_dir(dir)?,
        None => ReferenceData::bundled()?,
    };
    tracing::info!(
        "Reference data ready: {} depots, {} zones",
        reference.depots().len(),
        reference.zones().len()
    );
    let reference = Arc::new(reference);

    let quote_stats = Arc::new(QuoteOutcomeStats::default());
    let event_sink = Arc::new(WebQuoteEventSink::start(quote_stats.clone()));
    let options = QuoteServiceOptions {
        cache_precision: config.cache_precision,
        reject_unpriced: config.reject_unpriced,
    };
    let store: Arc<dyn QuoteStore> = quote_repository.clone();
    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(
        reference.clone(),
        options,
        store,
        event_sink,
    ));

    Ok(Arc::new(AppState {
        reference,
        quote_service,
        quote_repository,
        quote_stats,
    }))
}
