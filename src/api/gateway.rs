//! Payment gateway capability interface
//!
//! The checkout flow is independent of which gateway SDK is wired in; a
//! host application implements this trait over whatever vendor it uses.

use async_trait::async_trait;

/// Authorization produced by a successful gateway flow
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayAuthorization {
    /// Transaction reference assigned by the gateway
    pub transaction_id: String,
    /// Name of the gateway that authorized the payment
    pub gateway: String,
}

impl GatewayAuthorization {
    /// Creates a new GatewayAuthorization
    pub fn new(transaction_id: String, gateway: String) -> Self {
        Self {
            transaction_id,
            gateway,
        }
    }
}

/// Outcome of a gateway authorization attempt
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResult {
    /// The user completed the flow and the gateway authorized the amount
    Approved(GatewayAuthorization),
    /// The user dismissed the gateway flow
    Cancelled,
    /// The gateway processed the request and declined it
    Declined,
    /// The gateway could not be reached or errored out
    Unavailable,
}

/// Capability interface over an external payment gateway
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Runs the gateway authorization flow for the given amount
    ///
    /// Never returns a transport error; unreachable gateways are reported
    /// as `GatewayResult::Unavailable`.
    async fn authorize(&self, amount: f64) -> GatewayResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ApproveAll;

    #[async_trait]
    impl PaymentGateway for ApproveAll {
        async fn authorize(&self, _amount: f64) -> GatewayResult {
            GatewayResult::Approved(GatewayAuthorization::new(
                "txn-1".to_string(),
                "testpay".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_gateway_trait_object() {
        let gateway: Box<dyn PaymentGateway> = Box::new(ApproveAll);

        match gateway.authorize(240.0).await {
            GatewayResult::Approved(auth) => {
                assert_eq!(auth.transaction_id, "txn-1");
                assert_eq!(auth.gateway, "testpay");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
