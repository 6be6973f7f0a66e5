//! Currency code identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a currency code from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid currency code: {0:?}")]
pub struct InvalidCurrencyCode(pub String);

/// A short alphabetic currency identifier (e.g. "USD").
///
/// The supported set is fetched from the data service at runtime, so this is
/// an open type rather than an enum. Membership in the fetched list is not
/// checked anywhere in the core; an unknown code is left for the service to
/// reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Wraps a code as-is. Used for service-provided identifiers, which are
    /// taken on trust.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = InvalidCurrencyCode;

    /// Parses user input: trims, uppercases, and requires a non-empty
    /// ASCII-alphabetic string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidCurrencyCode(s.to_string()));
        }
        Ok(Self(trimmed.to_uppercase()))
    }
}
