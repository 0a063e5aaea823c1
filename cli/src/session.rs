//! Converter session state.
//!
//! Owns the transient UI state (selected currencies, amount text, last
//! outcome) and re-runs the conversion after every mutation, replacing
//! the declarative recompute-on-change of a reactive UI with explicit
//! re-invocation.

use pocketfx_common::Currency;
use pocketfx_rates::{format, ConversionEngine, ConversionOutcome, RateTable};

/// Single-screen converter state: one amount field, two currency slots,
/// one output pane.
pub struct ConverterSession {
    engine: ConversionEngine,
    source: Currency,
    target: Currency,
    amount_input: String,
    outcome: ConversionOutcome,
}

impl ConverterSession {
    /// Start a session with the default selection (USD -> IDR) and a
    /// blank amount.
    pub fn new(engine: ConversionEngine) -> Self {
        let mut session = Self {
            engine,
            source: Currency::usd(),
            target: Currency::idr(),
            amount_input: String::new(),
            outcome: ConversionOutcome::Empty,
        };
        session.recompute();
        session
    }

    /// Currently selected source currency.
    pub fn source(&self) -> &Currency {
        &self.source
    }

    /// Currently selected target currency.
    pub fn target(&self) -> &Currency {
        &self.target
    }

    /// Current amount text.
    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// The rate table backing this session's engine.
    pub fn rate_table(&self) -> &RateTable {
        self.engine.table()
    }

    /// Text for the output pane. Blank input shows as blank.
    pub fn display_output(&self) -> &str {
        self.outcome.display_text()
    }

    /// Replace the amount text and reconvert.
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount_input = text.into();
        self.recompute();
    }

    /// Select the source currency. Choosing the currency already in the
    /// target slot swaps the slots; the two selections never collide.
    pub fn select_source(&mut self, currency: Currency) {
        if currency == self.target {
            self.target = self.source.clone();
        }
        self.source = currency;
        self.recompute();
    }

    /// Select the target currency, with the same collision rule as
    /// [`ConverterSession::select_source`].
    pub fn select_target(&mut self, currency: Currency) {
        if currency == self.source {
            self.source = self.target.clone();
        }
        self.target = currency;
        self.recompute();
    }

    /// Exchange the source and target slots, carrying the previously
    /// displayed output into the amount field when possible.
    ///
    /// The prior output is reparsed under the new source currency's
    /// format and rendered plainly; blank or invalid prior output, or a
    /// reparse failure, clears the amount instead. No error surfaces.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);

        self.amount_input = match &self.outcome {
            ConversionOutcome::Converted(formatted) => {
                match format::reparse_display(&formatted.text, &self.source) {
                    Some(value) => format::plain_amount(value, &self.source),
                    None => String::new(),
                }
            }
            _ => String::new(),
        };

        self.recompute();
    }

    fn recompute(&mut self) {
        self.outcome = self
            .engine
            .convert(&self.amount_input, &self.source, &self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn session() -> ConverterSession {
        ConverterSession::new(ConversionEngine::with_builtin_rates())
    }

    #[test]
    fn test_initial_state() {
        let session = session();

        assert_eq!(session.source(), &Currency::usd());
        assert_eq!(session.target(), &Currency::idr());
        assert_eq!(session.amount_input(), "");
        assert_eq!(session.display_output(), "");
    }

    #[test]
    fn test_set_amount_reconverts() {
        let mut session = session();

        session.set_amount("100");
        assert_eq!(session.display_output(), "Rp1.600.000");

        session.set_amount("abc");
        assert_eq!(session.display_output(), "Invalid input");

        session.set_amount("");
        assert_eq!(session.display_output(), "");
    }

    #[test]
    fn test_conversion_carries_target_money() {
        let mut session = session();

        session.set_amount("100");

        match &session.outcome {
            ConversionOutcome::Converted(formatted) => {
                assert_eq!(formatted.money.currency, Currency::idr());
                assert_eq!(formatted.money.value, dec!(1600000));
            }
            other => panic!("expected conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_selection_change_reconverts() {
        let mut session = session();
        session.set_amount("100");

        session.select_target(Currency::eur());
        assert_eq!(session.display_output(), "92.00");
    }

    #[test]
    fn test_selecting_target_equal_to_source_swaps() {
        let mut session = session();

        session.select_target(Currency::usd());

        assert_eq!(session.source(), &Currency::idr());
        assert_eq!(session.target(), &Currency::usd());
    }

    #[test]
    fn test_selecting_source_equal_to_target_swaps() {
        let mut session = session();

        session.select_source(Currency::idr());

        assert_eq!(session.source(), &Currency::idr());
        assert_eq!(session.target(), &Currency::usd());
    }

    #[test]
    fn test_swap_with_blank_output_clears_amount() {
        let mut session = session();

        session.swap();

        assert_eq!(session.source(), &Currency::idr());
        assert_eq!(session.target(), &Currency::usd());
        assert_eq!(session.amount_input(), "");
        assert_eq!(session.display_output(), "");
    }

    #[test]
    fn test_swap_with_invalid_output_clears_amount() {
        let mut session = session();
        session.set_amount("not a number");

        session.swap();

        assert_eq!(session.amount_input(), "");
        assert_eq!(session.display_output(), "");
    }

    #[test]
    fn test_swap_carries_output_into_input() {
        let mut session = session();
        session.set_amount("100");
        assert_eq!(session.display_output(), "Rp1.600.000");

        session.swap();

        assert_eq!(session.source(), &Currency::idr());
        assert_eq!(session.target(), &Currency::usd());
        assert_eq!(session.amount_input(), "1600000");
        assert_eq!(session.display_output(), "$100.00");
    }

    #[test]
    fn test_double_swap_round_trips() {
        let mut session = session();
        session.set_amount("100");

        session.swap();
        session.swap();

        assert_eq!(session.source(), &Currency::usd());
        assert_eq!(session.target(), &Currency::idr());
        assert_eq!(session.amount_input(), "100.00");
        assert_eq!(session.display_output(), "Rp1.600.000");
    }

    #[test]
    fn test_swap_with_generic_target_format() {
        let mut session = session();
        session.select_target(Currency::eur());
        session.set_amount("100");
        assert_eq!(session.display_output(), "92.00");

        session.swap();

        assert_eq!(session.source(), &Currency::eur());
        assert_eq!(session.amount_input(), "92.00");
        assert_eq!(session.display_output(), "$100.00");
    }
}
