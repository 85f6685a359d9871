use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};

use super::lifecycle::{QuoteLifecycle, QuoteState};
use super::quote_id::{QuoteIdGenerator, TimestampQuoteIdGenerator};
use super::quotes_constants::DELIVERY_ESTIMATE_DAYS;
use super::quotes_errors::QuoteError;
use super::quotes_model::{QuoteCalculation, QuoteComputed, QuoteRecord, QuoteRequest, StoredQuote};
use super::quotes_traits::QuoteServiceTrait;
use super::store::QuoteStore;
use crate::distance::{DistanceResolver, DEFAULT_CACHE_PRECISION};
use crate::errors::{Error, Result};
use crate::events::{QuoteEvent, QuoteEventSink};
use crate::pricing::{PricingCalculator, PricingInput, PricingParameters};
use crate::reference::ReferenceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteServiceOptions {
    /// Decimal places used when matching coordinates against the distance cache
    pub cache_precision: usize,
    /// Reject cargo type / zone combinations with no configured rate instead
    /// of quoting them at zero
    pub reject_unpriced: bool,
}

impl Default for QuoteServiceOptions {
    fn default() -> Self {
        Self {
            cache_precision: DEFAULT_CACHE_PRECISION,
            reject_unpriced: false,
        }
    }
}

/// Service driving a quote request from validation to persistence.
pub struct QuoteService {
    reference: Arc<ReferenceData>,
    resolver: DistanceResolver,
    calculator: PricingCalculator,
    options: QuoteServiceOptions,
    store: Arc<dyn QuoteStore>,
    event_sink: Arc<dyn QuoteEventSink>,
    id_generator: Arc<dyn QuoteIdGenerator>,
}

impl QuoteService {
    pub fn new(
        reference: Arc<ReferenceData>,
        options: QuoteServiceOptions,
        store: Arc<dyn QuoteStore>,
        event_sink: Arc<dyn QuoteEventSink>,
    ) -> Self {
        let resolver =
            DistanceResolver::new(reference.distance_cache_entries(), options.cache_precision);
        let calculator = PricingCalculator::new(
            reference.rate_table().clone(),
            PricingParameters::with_margin(reference.margin_factor()),
        );
        Self {
            reference,
            resolver,
            calculator,
            options,
            store,
            event_sink,
            id_generator: Arc::new(TimestampQuoteIdGenerator),
        }
    }

    pub fn with_id_generator(mut self, id_generator: Arc<dyn QuoteIdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn options(&self) -> QuoteServiceOptions {
        self.options
    }

    fn price(&self, request: &QuoteRequest) -> std::result::Result<QuoteCalculation, QuoteError> {
        let depot = self
            .reference
            .resolve_depot(&request.depot)
            .ok_or_else(|| QuoteError::DepotNotFound(request.depot.clone()))?;
        let locality = self
            .reference
            .find_locality(&request.zone, &request.locality)
            .ok_or_else(|| QuoteError::LocalityNotFound {
                zone: request.zone.clone(),
                locality: request.locality.clone(),
            })?;

        let distance = self
            .resolver
            .resolve(depot.coordinates(), locality.coordinates());
        debug!(
            "Distance {} -> {}: {} km ({:?})",
            depot.id, locality.name, distance.km, distance.source
        );

        if self.options.reject_unpriced
            && self
                .calculator
                .rates()
                .lookup(&request.cargo_type, &request.zone)
                .is_none()
        {
            return Err(QuoteError::RateNotFound {
                cargo_type: request.cargo_type.clone(),
                zone: request.zone.clone(),
            });
        }

        let input = PricingInput {
            cargo_type: request.cargo_type.clone(),
            distance_km: distance.km,
            zone: request.zone.clone(),
            locality: request.locality.clone(),
            tax_included: request.tax_included,
            insured: request.insured,
            quantity: request.quantity,
            declared_value: request.declared_value.unwrap_or(0.0),
        };
        let breakdown = self
            .calculator
            .breakdown(&input)
            .ok_or(QuoteError::PricingUnavailable)?;

        Ok(QuoteCalculation {
            depot: depot.clone(),
            destination: request.destination_label(),
            distance,
            breakdown,
        })
    }

    fn reject(&self, lifecycle: &mut QuoteLifecycle, err: QuoteError) -> Error {
        warn!("Quote rejected: {}", err);
        if let Err(transition) = lifecycle.advance(QuoteState::Rejected) {
            debug!("{}", transition);
        }
        self.event_sink.emit(QuoteEvent::rejected(&err));
        Error::Quote(err)
    }

    /// Starts persistence on the runtime and returns immediately. The outcome
    /// is only observable through the emitted event.
    fn spawn_persist(&self, quote: &QuoteComputed) {
        let store = Arc::clone(&self.store);
        let event_sink = Arc::clone(&self.event_sink);
        let quote = quote.clone();
        tokio::spawn(async move {
            let _ = persist_record(store.as_ref(), event_sink.as_ref(), &quote).await;
        });
    }
}

/// Saves one quote and reports the outcome. Errors are returned to the
/// caller as well as emitted.
async fn persist_record(
    store: &dyn QuoteStore,
    event_sink: &dyn QuoteEventSink,
    quote: &QuoteComputed,
) -> Result<StoredQuote> {
    let record = QuoteRecord::from(quote);
    match store.save(&record).await {
        Ok(stored) => {
            info!("Quote {} stored as {}", quote.quote_id, stored.id);
            event_sink.emit(QuoteEvent::persisted(&quote.quote_id, &stored.id));
            Ok(stored)
        }
        Err(e) => {
            warn!("Failed to store quote {}: {}", quote.quote_id, e);
            event_sink.emit(QuoteEvent::persist_failed(&quote.quote_id, &e));
            Err(e)
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    fn validate_request(&self, request: &QuoteRequest) -> std::result::Result<(), QuoteError> {
        if !request.cargo_type.is_empty() {
            if let Err(range) = self
                .reference
                .cargo_bands()
                .check_quantity(&request.cargo_type, request.quantity)
            {
                return Err(QuoteError::QuantityOutOfRange {
                    cargo_type: request.cargo_type.clone(),
                    range,
                });
            }
        }

        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(QuoteError::IncompleteRequest { missing });
        }
        Ok(())
    }

    fn calculate(&self, request: &QuoteRequest) -> Result<QuoteCalculation> {
        self.validate_request(request)?;
        Ok(self.price(request)?)
    }

    async fn submit_quote(&self, request: QuoteRequest) -> Result<QuoteComputed> {
        let mut lifecycle = QuoteLifecycle::new();
        lifecycle.advance(QuoteState::Validating)?;
        if let Err(err) = self.validate_request(&request) {
            return Err(self.reject(&mut lifecycle, err));
        }

        lifecycle.advance(QuoteState::Calculating)?;
        let calculation = match self.price(&request) {
            Ok(calculation) => calculation,
            Err(err) => return Err(self.reject(&mut lifecycle, err)),
        };
        lifecycle.advance(QuoteState::Computed)?;

        let created_at = Utc::now();
        let quote = QuoteComputed {
            quote_id: self.id_generator.generate(created_at),
            origin_depot_id: calculation.depot.id.clone(),
            origin: calculation.depot.name.clone(),
            destination: calculation.destination.clone(),
            distance_km: calculation.distance.km,
            price: calculation.price(),
            delivery_estimate: DELIVERY_ESTIMATE_DAYS.to_string(),
            created_at,
            valid_until: QuoteComputed::validity_window(created_at),
            request,
        };
        info!(
            "Quote {} computed: {} km, price {}",
            quote.quote_id, quote.distance_km, quote.price
        );
        self.event_sink.emit(QuoteEvent::computed(
            &quote.quote_id,
            quote.distance_km,
            quote.price,
        ));

        self.spawn_persist(&quote);
        Ok(quote)
    }

    async fn persist_quote(&self, quote: &QuoteComputed) -> Result<StoredQuote> {
        persist_record(self.store.as_ref(), self.event_sink.as_ref(), quote).await
    }
}
