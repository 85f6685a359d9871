use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::pricing_model::{PriceBreakdown, PricingInput, PricingParameters};
use super::rate_table::RateTable;

/// Applies the quote price formula to a rate table.
///
/// Steps, in order: base rate × (1 + margin), long-haul surcharge, quantity
/// scaling (skipped for the flat-rate cargo type), tax, then the additive
/// insurance premium. The result is rounded once, at the end.
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    rates: RateTable,
    params: PricingParameters,
}

impl PricingCalculator {
    pub fn new(rates: RateTable, params: PricingParameters) -> Self {
        Self { rates, params }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn params(&self) -> &PricingParameters {
        &self.params
    }

    pub fn base_rate(&self, cargo_type: &str, zone: &str) -> Decimal {
        self.rates.base_rate(cargo_type, zone)
    }

    /// Final price in whole currency units, or `None` when an input is
    /// missing, zero-distance, not a number, or the amount overflows.
    pub fn compute_price(&self, input: &PricingInput) -> Option<i64> {
        self.breakdown(input).map(|b| b.total)
    }

    pub fn breakdown(&self, input: &PricingInput) -> Option<PriceBreakdown> {
        if input.cargo_type.is_empty()
            || input.distance_km == 0
            || input.zone.is_empty()
            || input.locality.is_empty()
        {
            return None;
        }
        let quantity = Decimal::from_f64(input.quantity)?;
        let declared_value = Decimal::from_f64(input.declared_value)?;

        let p = &self.params;
        let base_rate = self.rates.base_rate(&input.cargo_type, &input.zone);
        let with_margin = base_rate.checked_mul(Decimal::ONE + p.margin_factor)?;

        let with_long_haul = if input.distance_km > p.long_haul_threshold_km {
            let excess = Decimal::from(input.distance_km - p.long_haul_threshold_km);
            with_margin.checked_mul(Decimal::ONE + excess * p.long_haul_factor_per_km)?
        } else {
            with_margin
        };

        let with_quantity = if input.cargo_type == p.flat_rate_cargo_type {
            with_long_haul
        } else {
            with_long_haul.checked_mul(quantity.max(Decimal::ONE))?
        };

        let with_tax = if input.tax_included {
            with_quantity.checked_mul(Decimal::ONE + p.tax_rate)?
        } else {
            with_quantity
        };

        let insurance = if input.insured {
            declared_value.max(Decimal::ZERO).checked_mul(p.insurance_rate)?
        } else {
            Decimal::ZERO
        };

        let unrounded_total = with_tax.checked_add(insurance)?;
        let total = unrounded_total
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()?;

        Some(PriceBreakdown {
            base_rate,
            with_margin,
            with_long_haul,
            with_quantity,
            with_tax,
            insurance,
            unrounded_total,
            total,
        })
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(RateTable::standard(), PricingParameters::default())
    }
}
