use serde::{Deserialize, Serialize};

/// Gateway transaction details attached to an order paid through UPI
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    /// Transaction reference assigned by the gateway
    pub transaction_id: String,
    /// Name of the gateway that authorized the payment
    pub gateway: String,
    /// Payment method tag (e.g., "upi")
    pub method: String,
    /// Unix timestamp when the authorization completed
    pub timestamp: u64,
}

impl PaymentDetails {
    /// Creates new PaymentDetails
    pub fn new(transaction_id: String, gateway: String, method: String, timestamp: u64) -> Self {
        Self {
            transaction_id,
            gateway,
            method,
            timestamp,
        }
    }
}
