//! Dispatch configuration and fare arithmetic.

use crate::{CoreError, CoreResult, Distance};

/// Default fare in currency units per kilometre.
pub const DEFAULT_FARE_RATE: f64 = 100.0;

/// Default currency label used when presenting fares.
pub const DEFAULT_CURRENCY: &str = "LKR";

/// Top-level ride dispatch configuration.
///
/// Construct with [`Default`] and override fields, then hand it to the
/// dispatcher builder, which calls [`validate`](Self::validate) once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Fare charged per kilometre of routed distance.
    pub fare_rate: f64,

    /// Presentation-only currency label; never used in arithmetic.
    pub currency: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            fare_rate: DEFAULT_FARE_RATE,
            currency:  DEFAULT_CURRENCY.to_owned(),
        }
    }
}

impl DispatchConfig {
    pub fn with_fare_rate(mut self, rate: f64) -> Self {
        self.fare_rate = rate;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Reject rates that would produce a non-finite or negative fare.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.fare_rate.is_finite() || self.fare_rate < 0.0 {
            return Err(CoreError::Config(format!(
                "fare_rate must be finite and non-negative, got {}",
                self.fare_rate
            )));
        }
        Ok(())
    }

    /// Linear fare: `distance × fare_rate`.
    #[inline]
    pub fn fare_for(&self, distance: Distance) -> f64 {
        distance.km() * self.fare_rate
    }
}
