//! Bundled user-facing strings.

use rust_decimal::Decimal;

use crate::core::{COMMISSION_RATE, round_money};

/// User-facing strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Calculator heading.
    pub title: &'static str,
    /// Line shown under the heading.
    pub subtitle: &'static str,
    /// Label of the net-price field.
    pub net_price_label: &'static str,
    /// Label of the VAT selector.
    pub vat_label: &'static str,
    /// Text before the gross cost amount.
    pub gross_cost_label: &'static str,
    /// Heading above the scenario table.
    pub scenarios_title: &'static str,
    /// Header of the markup column.
    pub markup_header: &'static str,
    /// Header of the listing price column.
    pub listing_price_header: &'static str,
    /// Commission rate is appended, e.g. "Pobrana Prowizja (15%)".
    pub commission_header: &'static str,
    /// Header of the profit column.
    pub profit_header: &'static str,
    /// Prompt shown while there is no result.
    pub placeholder: &'static str,
    /// Appended to every amount after a space.
    pub currency_suffix: &'static str,
}

/// Polish strings, as shown to Allegro sellers.
pub const POLISH: Locale = Locale {
    title: "Kalkulator Cen Królowej Allegro",
    subtitle: "Oblicz optymalne ceny dla swoich produktów na Allegro",
    net_price_label: "Cena netto z faktury (PLN)",
    vat_label: "Wybierz stawkę VAT",
    gross_cost_label: "Cena Brutto (Twój koszt):",
    scenarios_title: "Scenariusze cenowe",
    markup_header: "Zakładany Zysk (Narzut)",
    listing_price_header: "Cena do wystawienia na Allegro",
    commission_header: "Pobrana Prowizja",
    profit_header: "Zysk (w zł)",
    placeholder: "Wprowadź cenę netto, aby zobaczyć obliczenia",
    currency_suffix: "zł",
};

impl Default for Locale {
    fn default() -> Self {
        POLISH
    }
}

impl Locale {
    /// Commission column header including the rate.
    pub fn commission_column(&self) -> String {
        let percent = (COMMISSION_RATE * Decimal::ONE_HUNDRED).normalize();
        format!("{} ({percent}%)", self.commission_header)
    }

    /// Format an amount with two decimals and the currency suffix.
    pub fn format_currency(&self, amount: Decimal) -> String {
        format!("{} {}", round_money(amount), self.currency_suffix)
    }
}

/// Format an amount in złoty, e.g. `"123.00 zł"`.
pub fn format_currency(amount: Decimal) -> String {
    POLISH.format_currency(amount)
}
