//! Error types for the currency converter.

use crate::domain::CurrencyCode;

/// Failures reported by a currency data service.
///
/// String-typed so this crate carries no IO dependencies; adapters map their
/// transport errors into these variants.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service error: {status} - {message}")]
    Service { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no rate for {0} in response")]
    RateUnavailable(CurrencyCode),
}
