//! Domain models for the currency converter.

pub mod amount;
pub mod conversion;
pub mod currency;

pub use amount::{is_amount_text, parse_amount};
pub use conversion::Conversion;
pub use currency::{CurrencyCode, InvalidCurrencyCode};
