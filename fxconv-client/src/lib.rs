//! # Rates Client
//!
//! A typed Rust client for a Frankfurter-style exchange rate API.
//!
//! Two endpoints are used: `GET /currencies` for the supported-code list and
//! `GET /latest` for conversion quotes. No timeout is configured and no
//! retries are performed; callers own those policies.

use std::collections::HashMap;

use fxconv_types::{CurrencyCode, CurrencyDataService, ExchangeError};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ExchangeError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => ExchangeError::Network(e.to_string()),
            ClientError::Api { status, message } => ExchangeError::Service { status, message },
            ClientError::Json(e) => ExchangeError::MalformedResponse(e.to_string()),
        }
    }
}

/// Response body of `GET /latest`.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRates {
    /// The amount the quote was computed for, as the server parsed it.
    pub amount: f64,
    /// The source currency of the quote.
    pub base: CurrencyCode,
    /// Converted amounts keyed by target currency code.
    pub rates: HashMap<String, f64>,
}

impl LatestRates {
    /// The converted amount for `code`, if the server quoted it.
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code.as_str()).copied()
    }
}

/// Currency data service API client.
pub struct RatesClient {
    base_url: String,
    http: Client,
}

impl RatesClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetches the supported currencies.
    ///
    /// The response object's keys are the codes; its values (display names)
    /// are dropped. Key order is the server's order and is preserved.
    pub async fn currencies(&self) -> Result<Vec<CurrencyCode>, ClientError> {
        let body: serde_json::Map<String, serde_json::Value> = self.get("/currencies").await?;
        Ok(body.into_iter().map(|(k, _)| CurrencyCode::new(k)).collect())
    }

    /// Requests a conversion quote for `amount` between two codes.
    ///
    /// `amount` is passed through as raw text; the server parses it.
    pub async fn latest(
        &self,
        amount: &str,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<LatestRates, ClientError> {
        self.get(&format!("/latest?amount={amount}&from={from}&to={to}"))
            .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait::async_trait]
impl CurrencyDataService for RatesClient {
    async fn list_currencies(&self) -> Result<Vec<CurrencyCode>, ExchangeError> {
        self.currencies().await.map_err(Into::into)
    }

    async fn convert(
        &self,
        amount: &str,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ExchangeError> {
        let quote = self.latest(amount, from, to).await?;
        quote
            .rate_for(to)
            .ok_or_else(|| ExchangeError::RateUnavailable(to.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s)
    }

    #[test]
    fn test_client_creation() {
        let client = RatesClient::new("https://api.frankfurter.app");
        assert_eq!(client.base_url, "https://api.frankfurter.app");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = RatesClient::new("https://api.frankfurter.app/");
        assert_eq!(client.base_url, "https://api.frankfurter.app");
    }

    #[tokio::test]
    async fn test_currencies_preserves_server_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/currencies")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"USD":"United States Dollar","EUR":"Euro","GBP":"British Pound"}"#)
            .create_async()
            .await;

        let client = RatesClient::new(server.url());
        let currencies = client.currencies().await.unwrap();

        assert_eq!(currencies, vec![code("USD"), code("EUR"), code("GBP")]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_latest_parses_quote() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/latest?amount=100&from=USD&to=EUR")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"amount":100.0,"base":"USD","date":"2024-05-17","rates":{"EUR":92.5}}"#)
            .create_async()
            .await;

        let client = RatesClient::new(server.url());
        let quote = client
            .latest("100", &code("USD"), &code("EUR"))
            .await
            .unwrap();

        assert_eq!(quote.amount, 100.0);
        assert_eq!(quote.base, code("USD"));
        assert_eq!(quote.rate_for(&code("EUR")), Some(92.5));
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/latest?amount=100&from=USD&to=XXX")
            .with_status(404)
            .with_body(r#"{"message":"not found"}"#)
            .create_async()
            .await;

        let client = RatesClient::new(server.url());
        let result = client.latest("100", &code("USD"), &code("XXX")).await;

        match result {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_convert_missing_target_rate() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/latest?amount=1&from=USD&to=EUR")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"amount":1.0,"base":"USD","date":"2024-05-17","rates":{"GBP":0.79}}"#)
            .create_async()
            .await;

        let client = RatesClient::new(server.url());
        let result = CurrencyDataService::convert(&client, "1", &code("USD"), &code("EUR")).await;

        assert!(matches!(result, Err(ExchangeError::RateUnavailable(c)) if c == code("EUR")));
    }

    #[tokio::test]
    async fn test_convert_returns_target_amount() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/latest?amount=12.5&from=USD&to=EUR")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"amount":12.5,"base":"USD","date":"2024-05-17","rates":{"EUR":11.4}}"#)
            .create_async()
            .await;

        let client = RatesClient::new(server.url());
        let converted = CurrencyDataService::convert(&client, "12.5", &code("USD"), &code("EUR"))
            .await
            .unwrap();

        assert_eq!(converted, 11.4);
    }
}
