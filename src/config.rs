//! Client configuration

use std::time::Duration;

/// Default timeout for an order submission (in seconds)
const DEFAULT_SUBMIT_TIMEOUT: u64 = 30;

/// Default country-code prefix stripped during phone normalization
const DEFAULT_COUNTRY_CODE_PREFIX: &str = "91";

/// Minimum digits a contact phone must have after normalization
const DEFAULT_MIN_PHONE_DIGITS: usize = 10;

/// Configuration for the ordering client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// How long to wait for the Order Service before treating the
    /// submission as a network failure
    pub submit_timeout: Duration,
    /// Country-code prefix stripped during phone normalization
    pub country_code_prefix: String,
    /// Minimum digits a contact phone must have after normalization
    pub min_phone_digits: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            submit_timeout: Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT),
            country_code_prefix: DEFAULT_COUNTRY_CODE_PREFIX.to_string(),
            min_phone_digits: DEFAULT_MIN_PHONE_DIGITS,
        }
    }
}

impl ClientConfig {
    /// Creates a ClientConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the submission timeout
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    /// Sets the country-code prefix used during phone normalization
    pub fn with_country_code_prefix(mut self, prefix: String) -> Self {
        self.country_code_prefix = prefix;
        self
    }

    /// Sets the minimum digit count for a valid contact phone
    pub fn with_min_phone_digits(mut self, min_digits: usize) -> Self {
        self.min_phone_digits = min_digits;
        self
    }
}
