use serde::{Deserialize, Serialize};

use super::engine::try_price_text;
use super::rates::VatRate;
use super::types::PricingResult;

/// Current contents of the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// Text of the net-price field, unvalidated.
    pub net_price_text: String,
    /// Selected VAT rate.
    pub vat_rate: VatRate,
}

/// Presentation layer that displays calculator output.
///
/// Implemented by whatever renders the form: a terminal report, a web
/// template, a GUI table.
pub trait PricingView {
    /// Show priced scenarios.
    fn show_result(&mut self, result: &PricingResult);

    /// Show the prompt asking for a net price.
    fn show_placeholder(&mut self);
}

/// Dispatch an optional result to a view.
pub fn present<V: PricingView + ?Sized>(result: Option<&PricingResult>, view: &mut V) {
    match result {
        Some(result) => view.show_result(result),
        None => view.show_placeholder(),
    }
}

/// Form state plus the result derived from it.
///
/// The result is recomputed whenever an input actually changes and reused
/// otherwise, so a view can be refreshed on every event without repricing.
///
/// ```
/// use allegro_pricing::core::*;
///
/// let mut calc = Calculator::new();
/// assert!(calc.result().is_none());
///
/// calc.set_net_price("100");
/// assert_eq!(calc.result().unwrap().gross_cost.to_string(), "123.00");
///
/// calc.select_vat("5");
/// assert_eq!(calc.result().unwrap().gross_cost.to_string(), "105.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    input: RawInput,
    result: Option<PricingResult>,
    evaluations: u64,
}

impl Calculator {
    /// Empty form with the standard 23% VAT rate selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing form contents.
    pub fn with_input(input: RawInput) -> Self {
        let mut calc = Self {
            input,
            result: None,
            evaluations: 0,
        };
        calc.recompute();
        calc
    }

    /// Replace the net-price text. Returns true if the input changed.
    pub fn set_net_price(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.input.net_price_text {
            return false;
        }
        self.input.net_price_text = text;
        self.recompute();
        true
    }

    /// Select the VAT rate. Returns true if the input changed.
    pub fn set_vat_rate(&mut self, vat_rate: VatRate) -> bool {
        if vat_rate == self.input.vat_rate {
            return false;
        }
        self.input.vat_rate = vat_rate;
        self.recompute();
        true
    }

    /// Select the VAT rate by selector token (see [`VatRate::from_selection`]).
    pub fn select_vat(&mut self, token: &str) -> bool {
        self.set_vat_rate(VatRate::from_selection(token))
    }

    /// Current form contents.
    pub fn input(&self) -> &RawInput {
        &self.input
    }

    /// Result for the current input, or `None` while the net price is invalid.
    pub fn result(&self) -> Option<&PricingResult> {
        self.result.as_ref()
    }

    /// How many times the engine has been run.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Push the current state to a view.
    pub fn present<V: PricingView + ?Sized>(&self, view: &mut V) {
        present(self.result(), view);
    }

    fn recompute(&mut self) {
        self.evaluations += 1;
        self.result = try_price_text(&self.input.net_price_text, self.input.vat_rate).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Default)]
    struct Recorder {
        results: Vec<PricingResult>,
        placeholders: usize,
    }

    impl PricingView for Recorder {
        fn show_result(&mut self, result: &PricingResult) {
            self.results.push(result.clone());
        }

        fn show_placeholder(&mut self) {
            self.placeholders += 1;
        }
    }

    #[test]
    fn starts_empty_with_standard_rate() {
        let calc = Calculator::new();
        assert_eq!(calc.input().net_price_text, "");
        assert_eq!(calc.input().vat_rate, VatRate::Standard);
        assert!(calc.result().is_none());
        assert_eq!(calc.evaluations(), 0);
    }

    #[test]
    fn unchanged_input_is_not_repriced() {
        let mut calc = Calculator::new();
        assert!(calc.set_net_price("100"));
        assert!(!calc.set_net_price("100"));
        assert!(!calc.select_vat("23"));
        assert_eq!(calc.evaluations(), 1);
    }

    #[test]
    fn changing_vat_reprices() {
        let mut calc = Calculator::new();
        calc.set_net_price("100");
        assert!(calc.select_vat("5"));
        assert_eq!(calc.result().unwrap().gross_cost, dec!(105.00));
        assert_eq!(calc.evaluations(), 2);
    }

    #[test]
    fn clearing_field_drops_result() {
        let mut calc = Calculator::new();
        calc.set_net_price("100");
        assert!(calc.result().is_some());
        calc.set_net_price("");
        assert!(calc.result().is_none());
    }

    #[test]
    fn with_input_prices_immediately() {
        let calc = Calculator::with_input(RawInput {
            net_price_text: "10".into(),
            vat_rate: VatRate::Reduced,
        });
        assert_eq!(calc.result().unwrap().gross_cost, dec!(10.50));
        assert_eq!(calc.evaluations(), 1);
    }

    #[test]
    fn present_dispatches_to_view() {
        let mut view = Recorder::default();
        let mut calc = Calculator::new();
        calc.present(&mut view);
        calc.set_net_price("100");
        calc.present(&mut view);
        assert_eq!(view.placeholders, 1);
        assert_eq!(view.results.len(), 1);
        assert_eq!(view.results[0].gross_cost, dec!(123.00));
    }
}
