//! Currency data service port.
//!
//! This trait defines the interface for remote currency data services.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::CurrencyCode;
use crate::error::ExchangeError;

/// Port trait for the remote currency data service.
#[async_trait::async_trait]
pub trait CurrencyDataService: Send + Sync {
    /// Lists the currency codes the service supports, in service order.
    async fn list_currencies(&self) -> Result<Vec<CurrencyCode>, ExchangeError>;

    /// Converts `amount` from one currency to another, returning the
    /// converted amount in the target currency.
    ///
    /// `amount` is raw user text; the service parses it. Behavior for
    /// `from == to` is service-dependent.
    async fn convert(
        &self,
        amount: &str,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ExchangeError>;
}
