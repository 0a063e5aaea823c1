//! PocketFX Rate Engine
//!
//! Converts amounts between catalog currencies through a static rate
//! table routed over a base unit (USD), and formats/reparses results
//! for display.
//!
//! # Example
//!
//! ```rust
//! use pocketfx_common::Currency;
//! use pocketfx_rates::ConversionEngine;
//!
//! let engine = ConversionEngine::with_builtin_rates();
//!
//! let out = engine.convert("100", &Currency::usd(), &Currency::idr());
//! assert_eq!(out.display_text(), "Rp1.600.000");
//!
//! let out = engine.convert("", &Currency::usd(), &Currency::idr());
//! assert_eq!(out.display_text(), "");
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod table;

pub use engine::{ConversionEngine, ConversionOutcome, FormattedAmount};
pub use error::RateTableError;
pub use format::reparse_display;
pub use table::{RateEntry, RateTable};
