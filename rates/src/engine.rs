//! The conversion engine.

use pocketfx_common::{Currency, Money};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::format;
use crate::table::RateTable;

/// Fixed sentinel shown when the amount text is not a number.
pub const INVALID_INPUT: &str = "Invalid input";

/// A successfully converted amount together with its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAmount {
    /// The converted amount, unrounded.
    pub money: Money,
    /// Locale-formatted display text; never empty.
    pub text: String,
}

/// Result of a conversion attempt.
///
/// Blank and unparseable input are recognized conditions, not errors:
/// neither aborts the caller, both map to fixed display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// No amount entered; displays as the empty string.
    Empty,
    /// The amount text is not a number; displays the sentinel.
    InvalidInput,
    /// The conversion succeeded.
    Converted(FormattedAmount),
}

impl ConversionOutcome {
    /// Display text for the output pane.
    pub fn display_text(&self) -> &str {
        match self {
            ConversionOutcome::Empty => "",
            ConversionOutcome::InvalidInput => INVALID_INPUT,
            ConversionOutcome::Converted(formatted) => &formatted.text,
        }
    }

    /// Whether this outcome carries a converted amount.
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted(_))
    }
}

/// Converts amounts between currencies via the base unit.
///
/// Pure with respect to its inputs and the table; conversions have no
/// side effects beyond logging.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    table: RateTable,
}

impl ConversionEngine {
    /// Create an engine over the given rate table.
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    /// Create an engine over the built-in catalog rates.
    pub fn with_builtin_rates() -> Self {
        Self::new(RateTable::builtin())
    }

    /// The rate table backing this engine.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Convert an amount entered as text from `source` to `target`.
    #[instrument(skip(self), fields(source = %source, target = %target))]
    pub fn convert(&self, amount: &str, source: &Currency, target: &Currency) -> ConversionOutcome {
        let trimmed = amount.trim();
        if trimmed.is_empty() {
            return ConversionOutcome::Empty;
        }

        let value: Decimal = match trimmed.parse() {
            Ok(value) => value,
            Err(_) => return ConversionOutcome::InvalidInput,
        };

        let in_base = value * self.table.to_base(source.code());
        let result = in_base * self.table.from_base(target.code());
        let text = format::display_amount(result, target);

        debug!(%value, %result, "conversion completed");

        ConversionOutcome::Converted(FormattedAmount {
            money: Money::new(result, target.clone()),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::reparse_display;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn engine() -> ConversionEngine {
        ConversionEngine::with_builtin_rates()
    }

    fn all_pairs() -> Vec<(Currency, Currency)> {
        let catalog = Currency::catalog();
        let mut pairs = Vec::new();
        for a in &catalog {
            for b in &catalog {
                pairs.push((a.clone(), b.clone()));
            }
        }
        pairs
    }

    #[test]
    fn test_blank_input_is_empty_for_all_pairs() {
        let engine = engine();

        for (a, b) in all_pairs() {
            assert_eq!(engine.convert("", &a, &b), ConversionOutcome::Empty);
            assert_eq!(engine.convert("   ", &a, &b), ConversionOutcome::Empty);
            assert_eq!(engine.convert("", &a, &b).display_text(), "");
        }
    }

    #[test]
    fn test_non_numeric_input_is_invalid_for_all_pairs() {
        let engine = engine();

        for (a, b) in all_pairs() {
            let outcome = engine.convert("abc", &a, &b);
            assert_eq!(outcome, ConversionOutcome::InvalidInput);
            assert_eq!(outcome.display_text(), "Invalid input");
        }
    }

    #[test]
    fn test_usd_to_idr() {
        let engine = engine();

        let out = engine.convert("1", &Currency::usd(), &Currency::idr());
        assert_eq!(out.display_text(), "Rp16.000");

        let out = engine.convert("100", &Currency::usd(), &Currency::idr());
        assert_eq!(out.display_text(), "Rp1.600.000");
    }

    #[test]
    fn test_idr_to_usd_rounds_up_at_midpoint() {
        let engine = engine();

        // 10000 IDR is exactly 0.625 USD
        let out = engine.convert("10000", &Currency::idr(), &Currency::usd());
        assert_eq!(out.display_text(), "$0.63");
    }

    #[test]
    fn test_usd_to_eur_uses_generic_formatting() {
        let engine = engine();

        let out = engine.convert("100", &Currency::usd(), &Currency::eur());
        assert_eq!(out.display_text(), "92.00");
    }

    #[test]
    fn test_usd_to_jpy() {
        let engine = engine();

        let out = engine.convert("2", &Currency::usd(), &Currency::jpy());
        assert_eq!(out.display_text(), "310.00");
    }

    #[test]
    fn test_identity_conversion() {
        let engine = engine();

        let out = engine.convert("100", &Currency::usd(), &Currency::usd());
        assert_eq!(out.display_text(), "$100.00");
    }

    #[test]
    fn test_input_is_trimmed() {
        let engine = engine();

        let out = engine.convert(" 1 ", &Currency::usd(), &Currency::idr());
        assert_eq!(out.display_text(), "Rp16.000");
    }

    #[test]
    fn test_converted_money_carries_target_currency() {
        let engine = engine();

        let out = engine.convert("100", &Currency::usd(), &Currency::idr());
        match out {
            ConversionOutcome::Converted(formatted) => {
                assert_eq!(formatted.money.currency, Currency::idr());
                assert_eq!(formatted.money.value, dec!(1600000));
            }
            other => panic!("expected conversion, got {other:?}"),
        }
    }

    proptest! {
        // Converting, reparsing the display text, and applying the
        // inverse rates recovers the input within display precision:
        // one whole unit for IDR, a cent otherwise.
        #[test]
        fn prop_round_trip_recovers_amount(
            cents in 1u64..100_000_000u64,
            source_idx in 0usize..4,
            target_idx in 0usize..4,
        ) {
            let catalog = Currency::catalog();
            let source = catalog[source_idx].clone();
            let target = catalog[target_idx].clone();
            let amount = Decimal::new(cents as i64, 2);

            let engine = engine();
            let out = engine.convert(&amount.to_string(), &source, &target);
            let formatted = match out {
                ConversionOutcome::Converted(formatted) => formatted,
                other => panic!("expected conversion, got {other:?}"),
            };

            let reparsed = reparse_display(&formatted.text, &target)
                .expect("display text must reparse");
            let recovered = reparsed
                * engine.table().to_base(target.code())
                * engine.table().from_base(source.code());

            // Display rounding may lose up to half a display unit in the
            // target currency, which scales back through the rates.
            let display_unit = Decimal::new(1, target.display_decimals());
            let tolerance = display_unit
                * engine.table().to_base(target.code())
                * engine.table().from_base(source.code());

            let drift = (recovered - amount).abs();
            prop_assert!(
                drift <= tolerance,
                "drift {} exceeds tolerance {} for {} -> {}",
                drift, tolerance, source, target
            );
        }
    }
}
