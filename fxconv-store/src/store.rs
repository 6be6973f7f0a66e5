//! Conversion State Store
//!
//! Single source of truth for conversion inputs and outputs. All calls to
//! the currency data service go through here; consumers read state and
//! invoke mutators, nothing else.

use fxconv_types::{
    Conversion, CurrencyCode, CurrencyDataService, is_amount_text, parse_amount,
};

/// Holds the selected currencies, the raw amount text, the fetched currency
/// list, and the outcome of the last successful conversion.
///
/// Generic over `S: CurrencyDataService` - the adapter is injected at
/// construction, so a store handle can only exist fully built. The store is
/// single-owner: `convert` takes `&mut self`, which rules out starting a
/// second conversion while one is awaiting.
pub struct ConverterStore<S: CurrencyDataService> {
    service: S,
    source: CurrencyCode,
    target: CurrencyCode,
    amount_text: String,
    currencies: Vec<CurrencyCode>,
    last_conversion: Option<Conversion>,
}

impl<S: CurrencyDataService> ConverterStore<S> {
    /// Creates a store with the default selections (USD -> EUR, amount "1")
    /// and performs the initial currency fetch.
    ///
    /// A failed fetch leaves the list empty and is only logged; consumers
    /// treat an empty list as "not ready yet".
    pub async fn new(service: S) -> Self {
        let mut store = Self {
            service,
            source: CurrencyCode::new("USD"),
            target: CurrencyCode::new("EUR"),
            amount_text: "1".to_string(),
            currencies: Vec::new(),
            last_conversion: None,
        };
        store.refresh_currencies().await;
        store
    }

    /// Re-fetches the supported currencies.
    ///
    /// On success the list is replaced wholesale, in service order. On
    /// failure the error goes to the log and the current list is kept.
    /// Nothing triggers this on a schedule; it runs once at construction
    /// and then only on explicit invocation.
    pub async fn refresh_currencies(&mut self) {
        match self.service.list_currencies().await {
            Ok(currencies) => self.currencies = currencies,
            Err(err) => tracing::error!("failed to fetch currencies: {}", err),
        }
    }

    /// Sets the amount text if it matches the numeric pattern (optional
    /// digits, at most one decimal point).
    ///
    /// Returns false and leaves the state untouched for anything else, so
    /// the caller can decide whether to surface feedback. No parsing or
    /// range check happens here.
    pub fn set_amount(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if !is_amount_text(&text) {
            return false;
        }
        self.amount_text = text;
        true
    }

    /// Selects the source currency. Membership in the fetched list is not
    /// checked; an unsupported code is the service's to reject.
    pub fn set_source(&mut self, code: CurrencyCode) {
        self.source = code;
    }

    /// Selects the target currency.
    pub fn set_target(&mut self, code: CurrencyCode) {
        self.target = code;
    }

    /// Converts the current amount between the selected currencies.
    ///
    /// A no-op when the amount text holds no parseable number ("" or ".").
    /// On success the outcome replaces the previous one; on any service
    /// failure the outcome is cleared and the error goes to the log.
    /// Nothing propagates to the caller.
    pub async fn convert(&mut self) {
        let Some(requested) = parse_amount(&self.amount_text) else {
            return;
        };
        match self
            .service
            .convert(&self.amount_text, &self.source, &self.target)
            .await
        {
            Ok(converted) => {
                self.last_conversion = Some(Conversion::new(requested, converted));
            }
            Err(err) => {
                tracing::warn!(
                    "conversion {} -> {} failed: {}",
                    self.source,
                    self.target,
                    err
                );
                self.last_conversion = None;
            }
        }
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn source(&self) -> &CurrencyCode {
        &self.source
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    /// The supported currencies, in service order. Empty until the first
    /// successful fetch.
    pub fn currencies(&self) -> &[CurrencyCode] {
        &self.currencies
    }

    /// True once the supported-currency list has arrived.
    pub fn is_ready(&self) -> bool {
        !self.currencies.is_empty()
    }

    pub fn last_conversion(&self) -> Option<Conversion> {
        self.last_conversion
    }

    /// The converted amount of the last successful conversion.
    pub fn converted_amount(&self) -> Option<f64> {
        self.last_conversion.map(|c| c.converted_amount())
    }

    /// The unit rate of the last successful conversion, absent for a
    /// zero-amount request.
    pub fn unit_rate(&self) -> Option<f64> {
        self.last_conversion.and_then(|c| c.unit_rate())
    }
}
