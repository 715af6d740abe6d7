use rust_decimal::{Decimal, RoundingStrategy};

use super::error::PricingError;
use super::input::parse_net_price;
use super::rates::{COMMISSION_RATE, LISTING_COEFFICIENT, MARKUPS, Markup, VatRate};
use super::types::{PricingResult, ScenarioResult};

/// Price the raw contents of the calculator form.
///
/// `net_price_text` is the unvalidated text of the net-price field and
/// `vat_selection` the VAT selector token (`"5"` or `"23"`; anything other
/// than `"5"` means 23%).
///
/// Returns `None` when the net price is empty, not a number, or not
/// greater than zero. That is the expected state of an untouched form, not
/// an error.
///
/// ```
/// use allegro_pricing::core::calculate;
///
/// let result = calculate("100", "23").unwrap();
/// assert_eq!(result.gross_cost.to_string(), "123.00");
/// assert_eq!(result.scenarios[0].commission.to_string(), "23.88");
///
/// assert!(calculate("0", "23").is_none());
/// ```
pub fn calculate(net_price_text: &str, vat_selection: &str) -> Option<PricingResult> {
    try_price_text(net_price_text, VatRate::from_selection(vat_selection)).ok()
}

/// Price a net amount that has already been parsed.
///
/// Returns `None` for amounts that are zero or negative.
pub fn price(net_price: Decimal, vat_rate: VatRate) -> Option<PricingResult> {
    try_price(net_price, vat_rate).ok()
}

/// Like [`calculate`], but keeps the reason a net price was rejected.
pub fn try_price_text(
    net_price_text: &str,
    vat_rate: VatRate,
) -> Result<PricingResult, PricingError> {
    let net_price = parse_net_price(net_price_text).inspect_err(|err| {
        tracing::debug!(text = net_price_text, %err, "net price rejected");
    })?;
    try_price(net_price, vat_rate)
}

/// Like [`price`], but keeps the reason a net price was rejected.
///
/// # Formula
///
/// With `gross = net * (1 + vat)` and a commission rate `c` on the listing
/// price, each markup `m` is priced as:
///
/// - `profit = gross * m`
/// - `listing = (gross + profit) / (1 - c)`
/// - `commission = listing * c`
///
/// so that `listing - commission == gross + profit`. Rounding to two
/// decimal places happens only on the final values.
pub fn try_price(net_price: Decimal, vat_rate: VatRate) -> Result<PricingResult, PricingError> {
    if net_price <= Decimal::ZERO {
        tracing::debug!(%net_price, "net price rejected");
        return Err(PricingError::NonPositive(net_price));
    }

    let overflow = || {
        tracing::warn!(%net_price, "net price too large to price");
        PricingError::Overflow(net_price.to_string())
    };

    let gross_cost = net_price
        .checked_mul(vat_rate.multiplier())
        .ok_or_else(overflow)?;

    let [low, mid, high] = MARKUPS;
    let scenarios = [
        price_scenario(gross_cost, low).ok_or_else(overflow)?,
        price_scenario(gross_cost, mid).ok_or_else(overflow)?,
        price_scenario(gross_cost, high).ok_or_else(overflow)?,
    ];

    tracing::trace!(%net_price, %vat_rate, %gross_cost, "priced");

    Ok(PricingResult {
        net_price,
        vat_rate,
        gross_cost: round_money(gross_cost),
        scenarios,
    })
}

fn price_scenario(gross_cost: Decimal, markup: Markup) -> Option<ScenarioResult> {
    let profit = gross_cost.checked_mul(markup.rate)?;
    let listing_price = gross_cost
        .checked_add(profit)?
        .checked_div(LISTING_COEFFICIENT)?;
    let commission = listing_price.checked_mul(COMMISSION_RATE)?;

    Some(ScenarioResult {
        markup_label: markup.label.to_string(),
        listing_price: round_money(listing_price),
        commission: round_money(commission),
        profit: round_money(profit),
    })
}

/// Round to two decimal places, half away from zero, always keeping two
/// fractional digits (`123` becomes `123.00`).
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
