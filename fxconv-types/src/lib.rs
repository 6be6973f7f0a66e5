//! # fxconv Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (CurrencyCode, Conversion, amount rules)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Exchange error taxonomy

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Conversion, CurrencyCode, InvalidCurrencyCode, is_amount_text, parse_amount};
pub use error::ExchangeError;
pub use ports::CurrencyDataService;
