use crate::core::catalog::Catalog;
use crate::domain::model::{PriceQuote, ServiceLevelKey};
use crate::utils::error::{GradingError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Dutch VAT.
pub const VAT_RATE: Decimal = dec!(0.21);

/// Quote for grading `card_count` cards at the given company/level.
///
/// Rounding happens once, on the VAT amount (half-up to cents), so totals
/// stay stable however large the batch gets.
pub fn calculate_prices(
    catalog: &Catalog,
    company: &str,
    service_level: ServiceLevelKey,
    card_count: usize,
) -> Result<PriceQuote> {
    if card_count == 0 {
        return Err(GradingError::InvalidArgument {
            message: "card count must be at least 1".to_string(),
        });
    }

    let level = catalog.service_level(company, service_level)?;
    let price_per_card = level.price;
    let subtotal = Decimal::from(card_count as u64) * price_per_card;
    let vat_amount =
        (subtotal * VAT_RATE).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal + vat_amount;

    Ok(PriceQuote {
        price_per_card,
        subtotal,
        vat_amount,
        total,
    })
}
