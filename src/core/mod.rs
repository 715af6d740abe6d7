//! Pricing engine, input validation, and calculator state.
//!
//! This module holds everything needed to turn the raw text of a net-price
//! field and a VAT selection into priced markup scenarios.

mod calculator;
mod engine;
mod error;
pub mod input;
pub mod rates;
mod types;

pub use calculator::*;
pub use engine::*;
pub use error::*;
pub use input::{SMALLEST_NET_PRICE, parse_net_price};
pub use rates::{COMMISSION_RATE, LISTING_COEFFICIENT, MARKUPS, Markup, VatRate};
pub use types::*;
