//! PocketFX Common Types
//!
//! Shared types for the PocketFX converter: the currency catalog and
//! monetary values.

pub mod error;
pub mod monetary;

pub use error::*;
pub use monetary::*;
