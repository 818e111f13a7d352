//! Custom error types for the SDK

use crate::core::types::{PaymentErrorKind, ValidationField};
use thiserror::Error;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    /// A checkout precondition failed; the field names what must be corrected
    #[error("Validation error: {0}")]
    Validation(ValidationField),

    /// The payment gateway step did not produce an authorization
    #[error("Payment error: {0}")]
    Payment(PaymentErrorKind),

    /// Connectivity failure during a service call
    #[error("Network error: {0}")]
    Network(String),

    /// The order service rejected order creation
    #[error("Order rejected: {0}")]
    Order(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Operation not permitted in current checkout stage
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Returns true when the user can retry the failed operation as-is
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Order(_))
            || matches!(self, Error::Payment(kind) if *kind != PaymentErrorKind::UserCancelled)
    }
}
