//! Fixed commission, markup and VAT tables.
//!
//! Allegro's commission and the markup scenarios are not configurable.
//! Polish VAT is limited to the two rates relevant for goods resold on the
//! marketplace: 5% (reduced) and 23% (standard).

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Allegro's commission, taken from the listing price.
pub const COMMISSION_RATE: Decimal = dec!(0.15);

/// Share of the listing price the seller keeps after commission.
pub const LISTING_COEFFICIENT: Decimal = dec!(0.85);

/// A target profit expressed as a fraction of gross cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    /// Fraction of gross cost, e.g. `0.10`.
    pub rate: Decimal,
    /// Display label, e.g. `"10%"`.
    pub label: &'static str,
}

/// Markup scenarios, in ascending order.
pub const MARKUPS: [Markup; 3] = [
    Markup {
        rate: dec!(0.10),
        label: "10%",
    },
    Markup {
        rate: dec!(0.15),
        label: "15%",
    },
    Markup {
        rate: dec!(0.20),
        label: "20%",
    },
];

/// Polish VAT rate applied to the net purchase price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VatRate {
    /// 5% — reduced rate (books, some foodstuffs).
    #[serde(rename = "5")]
    Reduced,
    /// 23% — standard rate.
    #[default]
    #[serde(rename = "23")]
    Standard,
}

impl VatRate {
    /// Interpret a VAT selector token.
    ///
    /// Only `"5"` selects the reduced rate. Every other token, including
    /// unknown ones, falls back to the standard rate.
    pub fn from_selection(token: &str) -> Self {
        match token {
            "5" => Self::Reduced,
            _ => Self::Standard,
        }
    }

    /// Selector token, as produced by the VAT dropdown.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Reduced => "5",
            Self::Standard => "23",
        }
    }

    /// Rate in percent.
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Reduced => dec!(5),
            Self::Standard => dec!(23),
        }
    }

    /// Factor turning a net amount into a gross amount.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Reduced => dec!(1.05),
            Self::Standard => dec!(1.23),
        }
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.code())
    }
}
