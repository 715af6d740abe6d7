//! Plain-text presentation of pricing results.
//!
//! Ships the Polish strings of the calculator and a [`PricingView`]
//! implementation that renders a terminal-friendly report.
//!
//! # Example
//!
//! ```
//! use allegro_pricing::core::*;
//! use allegro_pricing::render::*;
//!
//! let mut report = TextReport::new();
//! present(calculate("100", "23").as_ref(), &mut report);
//! assert!(report.output().starts_with("Cena Brutto (Twój koszt): 123.00 zł"));
//! ```
//!
//! [`PricingView`]: crate::core::PricingView

mod locale;
mod report;

pub use locale::{Locale, POLISH, format_currency};
pub use report::{TextReport, render_report};
