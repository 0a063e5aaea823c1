//! Monetary types for the PocketFX converter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatalogError, CatalogResult};

/// A currency as presented to the user: ISO-like code plus display name.
///
/// The catalog is fixed; currencies are never created or deleted at
/// runtime. Two currencies are equal when their codes are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    code: String,
    display_name: String,
}

impl Currency {
    /// Create a currency from code and display name.
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into().to_uppercase(),
            display_name: display_name.into(),
        }
    }

    /// Get the currency code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the human-readable display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Fraction digits used when rendering an amount in this currency.
    ///
    /// Rupiah amounts display without fraction digits; everything else
    /// displays with two.
    pub fn display_decimals(&self) -> u32 {
        match self.code.as_str() {
            "IDR" => 0,
            _ => 2,
        }
    }

    /// Catalog currencies
    pub fn usd() -> Self {
        Self::new("USD", "US Dollar")
    }

    pub fn idr() -> Self {
        Self::new("IDR", "Indonesian Rupiah")
    }

    pub fn eur() -> Self {
        Self::new("EUR", "Euro")
    }

    pub fn jpy() -> Self {
        Self::new("JPY", "Japanese Yen")
    }

    /// The full selectable catalog, in presentation order.
    pub fn catalog() -> Vec<Currency> {
        vec![Self::usd(), Self::idr(), Self::eur(), Self::jpy()]
    }

    /// Resolve a code against the catalog.
    pub fn from_code(code: &str) -> CatalogResult<Self> {
        let upper = code.trim().to_uppercase();
        Self::catalog()
            .into_iter()
            .find(|c| c.code == upper)
            .ok_or(CatalogError::UnknownCode(upper))
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A monetary amount with currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount value (high precision decimal).
    pub value: Decimal,
    /// The currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money instance.
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            value: Decimal::ZERO,
            currency,
        }
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
