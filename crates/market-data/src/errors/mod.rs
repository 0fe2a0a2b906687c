//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider has no rate for the requested currency pair.
    #[error("Rate not found: {from}/{to}")]
    RateNotFound {
        /// Base currency of the requested pair
        from: String,
        /// Quote currency of the requested pair
        to: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status or an unusable body.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a value that is not a usable rate.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::RateNotFound {
            from: "EUR".to_string(),
            to: "CHF".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate not found: EUR/CHF");

        let error = MarketDataError::ProviderError {
            provider: "FRANKFURTER".to_string(),
            message: "HTTP 500".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: FRANKFURTER - HTTP 500"
        );
    }
}
