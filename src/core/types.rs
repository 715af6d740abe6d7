use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates::VatRate;

/// Priced markup scenarios for one net price and VAT rate.
///
/// All amounts are rounded to two decimal places and carry exactly two
/// fractional digits, so `to_string()` yields display-ready values such as
/// `"123.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Validated net purchase price, as entered.
    pub net_price: Decimal,
    /// VAT rate applied to the net price.
    pub vat_rate: VatRate,
    /// Net price including VAT — the seller's actual cost.
    pub gross_cost: Decimal,
    /// One entry per markup, ascending (10%, 15%, 20%).
    pub scenarios: [ScenarioResult; 3],
}

/// Outcome of pricing one markup scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Markup label, e.g. `"15%"`.
    pub markup_label: String,
    /// Price to list on Allegro.
    pub listing_price: Decimal,
    /// Commission Allegro deducts from the listing price.
    pub commission: Decimal,
    /// Profit left to the seller after commission and cost.
    pub profit: Decimal,
}

impl PricingResult {
    /// Look up a scenario by its markup label.
    pub fn scenario(&self, markup_label: &str) -> Option<&ScenarioResult> {
        self.scenarios
            .iter()
            .find(|s| s.markup_label == markup_label)
    }

    /// Serialize to a JSON object for a web front end.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl ScenarioResult {
    /// What the seller receives from Allegro: listing price minus commission.
    pub fn payout(&self) -> Decimal {
        self.listing_price - self.commission
    }
}
