//! Terminal report of priced scenarios.

use crate::core::{PricingResult, PricingView, present};

use super::locale::{Locale, POLISH};

const COLUMN_SEPARATOR: &str = " | ";

/// [`PricingView`] that renders into a plain-text buffer.
///
/// Each `show_*` call replaces the previous output, mirroring a screen
/// that is redrawn on every input change.
#[derive(Debug, Clone)]
pub struct TextReport {
    locale: Locale,
    output: String,
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReport {
    /// Report using the bundled Polish strings.
    pub fn new() -> Self {
        Self::with_locale(POLISH)
    }

    /// Report using the given strings.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            output: String::new(),
        }
    }

    /// Text rendered by the last `show_*` call.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the report, returning the last rendered text.
    pub fn into_string(self) -> String {
        self.output
    }
}

impl PricingView for TextReport {
    fn show_result(&mut self, result: &PricingResult) {
        let l = &self.locale;
        let mut out = String::new();

        out.push_str(l.gross_cost_label);
        out.push(' ');
        out.push_str(&l.format_currency(result.gross_cost));
        out.push_str("\n\n");

        let header = vec![
            l.markup_header.to_string(),
            l.listing_price_header.to_string(),
            l.commission_column(),
            l.profit_header.to_string(),
        ];
        let rows: Vec<Vec<String>> = result
            .scenarios
            .iter()
            .map(|s| {
                vec![
                    s.markup_label.clone(),
                    l.format_currency(s.listing_price),
                    l.format_currency(s.commission),
                    l.format_currency(s.profit),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');
        for row in &rows {
            write_row(&mut out, row, &widths);
        }

        self.output = out;
    }

    fn show_placeholder(&mut self) {
        self.output = format!("{}\n", self.locale.placeholder);
    }
}

/// Pad every cell but the last to its column width, so lines carry no
/// trailing whitespace.
fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            out.push_str(cell);
        } else {
            out.push_str(&format!("{cell:<width$}"));
            out.push_str(COLUMN_SEPARATOR);
        }
    }
    out.push('\n');
}

/// Render an optional result with the Polish strings.
pub fn render_report(result: Option<&PricingResult>) -> String {
    let mut report = TextReport::new();
    present(result, &mut report);
    report.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculate;

    #[test]
    fn placeholder_when_no_result() {
        assert_eq!(
            render_report(None),
            "Wprowadź cenę netto, aby zobaczyć obliczenia\n"
        );
    }

    #[test]
    fn no_trailing_whitespace() {
        let text = render_report(calculate("100", "23").as_ref());
        for line in text.lines() {
            assert_eq!(line, line.trim_end(), "trailing whitespace in {line:?}");
        }
    }

    #[test]
    fn one_line_per_scenario() {
        let text = render_report(calculate("100", "5").as_ref());
        // gross line, blank, header, rule, 3 scenarios
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().any(|l| l.starts_with("20%")));
    }

    #[test]
    fn output_replaced_on_redraw() {
        let mut report = TextReport::new();
        report.show_placeholder();
        let result = calculate("100", "23").unwrap();
        report.show_result(&result);
        assert!(!report.output().contains("Wprowadź"));
    }

    #[test]
    fn custom_locale_strings_used() {
        let english = Locale {
            gross_cost_label: "Gross cost:",
            placeholder: "Enter a net price",
            currency_suffix: "PLN",
            ..POLISH
        };
        let mut report = TextReport::with_locale(english);
        report.show_placeholder();
        assert_eq!(report.output(), "Enter a net price\n");

        report.show_result(&calculate("100", "23").unwrap());
        let text = report.into_string();
        assert!(text.starts_with("Gross cost: 123.00 PLN\n"));
        assert!(text.lines().skip(4).all(|line| line.ends_with(" PLN")));
    }
}
