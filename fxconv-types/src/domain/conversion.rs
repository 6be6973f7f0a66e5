//! Outcome of a successful conversion.

use serde::{Deserialize, Serialize};

/// The requested and converted amounts of one conversion, kept together.
///
/// Storing the requested amount alongside the result means the unit rate is
/// always derived from the same request, even if the amount text in the
/// store has changed since. It also makes "converted amount and rate are
/// both present or both absent" hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    requested: f64,
    converted: f64,
}

impl Conversion {
    pub fn new(requested: f64, converted: f64) -> Self {
        Self {
            requested,
            converted,
        }
    }

    /// The amount that was sent for conversion, in the source currency.
    pub fn requested_amount(&self) -> f64 {
        self.requested
    }

    /// The amount returned by the service, in the target currency.
    pub fn converted_amount(&self) -> f64 {
        self.converted
    }

    /// Price of one unit of the source currency in the target currency.
    ///
    /// `None` when the requested amount was zero; a zero request has no
    /// meaningful per-unit price.
    pub fn unit_rate(&self) -> Option<f64> {
        if self.requested == 0.0 {
            None
        } else {
            Some(self.converted / self.requested)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_rate() {
        let conversion = Conversion::new(100.0, 92.5);
        assert_eq!(conversion.unit_rate(), Some(0.925));
    }

    #[test]
    fn test_unit_rate_zero_request() {
        let conversion = Conversion::new(0.0, 0.0);
        assert_eq!(conversion.unit_rate(), None);
    }
}
