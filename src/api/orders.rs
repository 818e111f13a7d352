//! Order Service interface and the submission client built on top of it

use crate::core::cart::Cart;
use crate::core::error::Error;
use crate::core::types::PaymentMethod;
use crate::models::{Address, Order, OrderConfirmation, OrderLine, OrderSubmission, PaymentDetails};
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Filter for the order-listing endpoint
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Restrict results to orders with this status tag
    pub status: Option<String>,
}

impl OrderFilter {
    /// Creates an empty filter matching every order
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to a single status tag
    pub fn with_status(mut self, status: String) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true when the order passes this filter
    pub fn matches(&self, order: &Order) -> bool {
        match &self.status {
            Some(status) => order.status == *status,
            None => true,
        }
    }
}

/// Interface to the remote Order Service
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Creates an order and returns the service-assigned confirmation
    async fn create_order(&self, order: &OrderSubmission) -> Result<OrderConfirmation>;

    /// Cancels an existing order
    async fn cancel_order(&self, order_id: &str) -> Result<()>;

    /// Lists the caller's orders matching the filter
    async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>>;
}

/// Client that serializes checkout state into order payloads and relays
/// them to the Order Service
pub struct OrderClient {
    /// The remote service implementation
    service: Box<dyn OrderService>,
}

impl OrderClient {
    /// Creates a new OrderClient over a service implementation
    pub fn new(service: Box<dyn OrderService>) -> Self {
        Self { service }
    }

    /// Projects the cart and checkout inputs into an order payload
    pub fn build_submission(
        cart: &Cart,
        address: &Address,
        method: PaymentMethod,
        payment_details: Option<PaymentDetails>,
        contact_phone: String,
        client_reference: String,
    ) -> OrderSubmission {
        let items: Vec<OrderLine> = cart.lines().iter().map(OrderLine::from).collect();

        let mut submission = OrderSubmission::new(
            items,
            address.clone(),
            method.as_str().to_string(),
            contact_phone,
            client_reference,
        );

        if let Some(details) = payment_details {
            submission = submission.with_payment_details(details);
        }

        submission
    }

    /// Sends an order and interprets the response
    ///
    /// The call is bounded by `timeout`; an elapsed timer is reported as a
    /// network error and leaves the cart intact for a retry. No raw
    /// transport failure leaks past this method.
    pub async fn submit(
        &self,
        submission: &OrderSubmission,
        timeout: Duration,
    ) -> Result<OrderConfirmation> {
        log::debug!(
            "Submitting order: {} item rows, method {}",
            submission.items.len(),
            submission.payment_method
        );

        let outcome = tokio::time::timeout(timeout, self.service.create_order(submission)).await;

        match outcome {
            Ok(Ok(confirmation)) => {
                log::info!("Order {} created", confirmation.order_number);
                Ok(confirmation)
            }
            Ok(Err(err)) => Err(Self::interpret(err)),
            Err(_) => Err(Error::Network(format!(
                "Order submission timed out after {}s",
                timeout.as_secs()
            ))),
        }
    }

    /// Cancels an order
    pub async fn cancel(&self, order_id: &str) -> Result<()> {
        self.service
            .cancel_order(order_id)
            .await
            .map_err(Self::interpret)
    }

    /// Lists the caller's orders matching the filter
    pub async fn orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        self.service
            .list_orders(filter)
            .await
            .map_err(Self::interpret)
    }

    /// Maps service failures onto the crate error taxonomy
    fn interpret(err: Error) -> Error {
        match err {
            Error::Network(_) | Error::Order(_) | Error::Payment(_) | Error::Validation(_) => err,
            other => Error::Network(other.to_string()),
        }
    }
}
