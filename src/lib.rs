//! # allegro-pricing
//!
//! Listing price calculator for sellers on the Allegro marketplace.
//!
//! Given the net purchase price from an invoice and a VAT rate, computes the
//! seller's gross cost and, for three fixed markups (10%, 15%, 20%), the
//! listing price that leaves the intended profit after Allegro deducts its
//! 15% commission.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every output is rounded to two decimal places only at the very end.
//!
//! ## Quick Start
//!
//! ```rust
//! use allegro_pricing::core::*;
//! use rust_decimal_macros::dec;
//!
//! let result = calculate("100", "23").unwrap();
//! assert_eq!(result.gross_cost, dec!(123.00));
//! assert_eq!(result.scenarios[0].listing_price, dec!(159.18));
//!
//! // Empty, unparsable and non-positive input yields no result.
//! assert!(calculate("", "23").is_none());
//! assert!(calculate("-5", "5").is_none());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rates, input parsing, pricing engine, calculator state |
//! | `render` (default) | Polish locale strings and plain-text report |
//! | `json` | JSON export of results via `serde_json` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "render")]
pub mod render;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
