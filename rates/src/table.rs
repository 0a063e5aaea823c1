//! Static rate table routed through a base unit.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RateResult, RateTableError};

/// Currency code of the base unit all conversions are routed through.
pub const BASE_CODE: &str = "USD";

/// Conversion factors for one currency relative to the base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Multiply an amount in this currency to get its base-unit value.
    pub to_base: Decimal,
    /// Multiply a base-unit value to get an amount in this currency.
    pub from_base: Decimal,
}

impl RateEntry {
    /// Build both directions from the number of currency units per base
    /// unit. The reciprocal is derived here so the two directions stay
    /// mutually consistent. `per_base` must be non-zero.
    fn from_per_base(per_base: Decimal) -> Self {
        Self {
            to_base: Decimal::ONE / per_base,
            from_base: per_base,
        }
    }
}

/// Mapping of currency code to conversion factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    entries: BTreeMap<String, RateEntry>,
}

impl RateTable {
    /// Build a table from units-per-base quotes, validating every rate.
    pub fn new(per_base: BTreeMap<String, Decimal>) -> RateResult<Self> {
        if per_base.is_empty() {
            return Err(RateTableError::Empty);
        }

        let mut entries = BTreeMap::new();
        for (code, rate) in per_base {
            if rate <= Decimal::ZERO {
                return Err(RateTableError::NonPositiveRate { code, rate });
            }
            entries.insert(code.to_uppercase(), RateEntry::from_per_base(rate));
        }

        Ok(Self { entries })
    }

    /// The built-in table for the catalog currencies.
    pub fn builtin() -> Self {
        let quotes = [
            ("USD", Decimal::ONE),
            ("IDR", Decimal::from(16_000)),
            ("EUR", Decimal::new(92, 2)),
            ("JPY", Decimal::from(155)),
        ];

        let mut entries = BTreeMap::new();
        for (code, per_base) in quotes {
            entries.insert(code.to_string(), RateEntry::from_per_base(per_base));
        }

        Self { entries }
    }

    /// Factor from the given currency to the base unit.
    ///
    /// A missing code falls back to the identity rate; the fallback masks
    /// a table misconfiguration, so it is logged.
    pub fn to_base(&self, code: &str) -> Decimal {
        match self.entries.get(code) {
            Some(entry) => entry.to_base,
            None => {
                warn!(code, "no rate entry, falling back to identity rate");
                Decimal::ONE
            }
        }
    }

    /// Factor from the base unit to the given currency, same fallback
    /// policy as [`RateTable::to_base`].
    pub fn from_base(&self, code: &str) -> Decimal {
        match self.entries.get(code) {
            Some(entry) => entry.from_base,
            None => {
                warn!(code, "no rate entry, falling back to identity rate");
                Decimal::ONE
            }
        }
    }

    /// Check whether a code has an entry.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Iterate entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RateEntry)> {
        self.entries.iter().map(|(code, entry)| (code.as_str(), entry))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
