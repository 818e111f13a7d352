//! Checkout orchestration
//!
//! Sequences the steps from a non-empty cart to a submitted order: address
//! selection, payment method selection, contact validation, gateway
//! authorization for prepaid methods, and order submission. Every failure
//! path returns control to an interactive, retryable stage; the cart is
//! only cleared after the Order Service confirms the order.

use crate::api::gateway::{GatewayResult, PaymentGateway};
use crate::api::orders::OrderClient;
use crate::config::ClientConfig;
use crate::core::cart::Cart;
use crate::core::error::Error;
use crate::core::pricing::PriceBreakdown;
use crate::core::types::{CheckoutStage, PaymentErrorKind, PaymentMethod, ValidationField};
use crate::models::{Address, OrderConfirmation, PaymentDetails, StoreSettings};
use crate::utils;
use crate::Result;
use chrono::Utc;
use uuid::Uuid;

/// Orchestrates one checkout session from review to confirmation
pub struct Checkout {
    /// Client configuration
    config: ClientConfig,
    /// Submission client over the Order Service
    orders: OrderClient,
    /// Payment gateway used for prepaid methods
    gateway: Box<dyn PaymentGateway>,
    /// Current stage of the session
    stage: CheckoutStage,
    /// Selected delivery address
    address: Option<Address>,
    /// Selected payment method
    payment_method: Option<PaymentMethod>,
    /// Contact phone as entered by the user
    contact_phone: Option<String>,
    /// Client reference sent with every submission of this session
    client_reference: String,
    /// True while a submission is in flight
    is_processing: bool,
    /// Message of the last failure, for the presentation layer
    last_error: Option<String>,
}

impl Checkout {
    /// Creates a new checkout session
    pub fn new(
        orders: OrderClient,
        gateway: Box<dyn PaymentGateway>,
        config: ClientConfig,
    ) -> Self {
        Self {
            config,
            orders,
            gateway,
            stage: CheckoutStage::Reviewing,
            address: None,
            payment_method: None,
            contact_phone: None,
            client_reference: Uuid::new_v4().to_string(),
            is_processing: false,
            last_error: None,
        }
    }

    /// Current stage of the session
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// True while a submission is in flight
    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    /// Message of the last failure, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Reference sent with every submission of this session
    pub fn client_reference(&self) -> &str {
        &self.client_reference
    }

    /// Moves from review into address selection
    ///
    /// The cart must be non-empty; an empty cart keeps the session in
    /// review and reports the failing precondition.
    pub fn begin(&mut self, cart: &Cart) -> Result<()> {
        self.ensure_interactive()?;

        if cart.is_empty() {
            return Err(self.record(Error::Validation(ValidationField::Cart)));
        }

        self.stage = CheckoutStage::SelectingAddress;
        Ok(())
    }

    /// Selects the delivery address
    pub fn select_address(&mut self, address: Address) -> Result<()> {
        self.ensure_interactive()?;

        log::debug!("Address selected: {}", address.address_id);
        self.address = Some(address);

        if self.stage == CheckoutStage::SelectingAddress {
            self.stage = CheckoutStage::SelectingPayment;
        }

        Ok(())
    }

    /// Selects the payment method
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<()> {
        self.ensure_interactive()?;

        log::debug!("Payment method selected: {}", method.as_str());
        self.payment_method = Some(method);
        Ok(())
    }

    /// Records the contact phone; validated at submission time
    pub fn set_contact_phone(&mut self, phone: &str) {
        self.contact_phone = Some(phone.to_string());
    }

    /// Submits the order
    ///
    /// Re-validates every precondition, runs the gateway step for prepaid
    /// methods, sends the order, and clears the cart on success. On failure
    /// the cart is untouched and `submit` may be called again.
    pub async fn submit(
        &mut self,
        cart: &mut Cart,
        settings: Option<&StoreSettings>,
    ) -> Result<OrderConfirmation> {
        self.ensure_interactive()?;

        if self.is_processing {
            return Err(Error::InvalidState(
                "A submission is already in flight".to_string(),
            ));
        }

        // Defensive re-validation; a failure leaves the stage unchanged.
        let (address, method, phone) = match self.validate(cart) {
            Ok(inputs) => inputs,
            Err(err) => return Err(self.record(err)),
        };

        self.is_processing = true;
        self.stage = CheckoutStage::Submitting;

        let breakdown = PriceBreakdown::compute(cart.items_total(), settings);

        let payment_details = if method.requires_gateway() {
            match self.authorize_payment(method, breakdown.grand_total).await {
                Ok(details) => Some(details),
                Err(err) => {
                    self.is_processing = false;
                    self.stage = CheckoutStage::SelectingPayment;
                    return Err(self.record(err));
                }
            }
        } else {
            None
        };

        let submission = OrderClient::build_submission(
            cart,
            &address,
            method,
            payment_details,
            phone,
            self.client_reference.clone(),
        );

        let outcome = self
            .orders
            .submit(&submission, self.config.submit_timeout)
            .await;
        self.is_processing = false;

        match outcome {
            Ok(confirmation) => {
                log::info!(
                    "Order {} confirmed, final amount {}",
                    confirmation.order_number,
                    confirmation.pricing.final_amount
                );
                cart.clear();
                self.stage = CheckoutStage::Succeeded;
                self.last_error = None;
                Ok(confirmation)
            }
            Err(err) => {
                self.stage = CheckoutStage::Failed;
                Err(self.record(err))
            }
        }
    }

    /// Runs the gateway authorization step for a prepaid method
    async fn authorize_payment(
        &self,
        method: PaymentMethod,
        amount: f64,
    ) -> Result<PaymentDetails> {
        log::debug!("Authorizing {} for {}", method.as_str(), amount);

        let kind = match self.gateway.authorize(amount).await {
            GatewayResult::Approved(auth) => {
                return Ok(PaymentDetails::new(
                    auth.transaction_id,
                    auth.gateway,
                    method.as_str().to_string(),
                    Utc::now().timestamp() as u64,
                ));
            }
            GatewayResult::Cancelled => PaymentErrorKind::UserCancelled,
            GatewayResult::Declined => PaymentErrorKind::GatewayDeclined,
            GatewayResult::Unavailable => PaymentErrorKind::GatewayUnavailable,
        };

        Err(Error::Payment(kind))
    }

    /// Checks every submission precondition
    fn validate(&self, cart: &Cart) -> Result<(Address, PaymentMethod, String)> {
        if cart.is_empty() {
            return Err(Error::Validation(ValidationField::Cart));
        }

        let address = self
            .address
            .clone()
            .ok_or_else(|| Error::Validation(ValidationField::Address))?;

        let method = self
            .payment_method
            .ok_or_else(|| Error::Validation(ValidationField::PaymentMethod))?;

        let phone = self
            .contact_phone
            .as_deref()
            .ok_or_else(|| Error::Validation(ValidationField::ContactPhone))?;

        let prefix = &self.config.country_code_prefix;
        let min_digits = self.config.min_phone_digits;

        if !utils::is_valid_phone(phone, prefix, min_digits) {
            return Err(Error::Validation(ValidationField::ContactPhone));
        }

        Ok((
            address,
            method,
            utils::normalize_phone(phone, prefix, min_digits),
        ))
    }

    /// Rejects calls after the session has reached its terminal stage
    fn ensure_interactive(&self) -> Result<()> {
        if self.stage.is_terminal() {
            return Err(Error::InvalidState(format!(
                "Checkout already {}",
                self.stage.as_str()
            )));
        }

        Ok(())
    }

    /// Stores the failure message for the presentation layer
    fn record(&mut self, err: Error) -> Error {
        log::warn!("Checkout error at stage {}: {}", self.stage.as_str(), err);
        self.last_error = Some(err.to_string());
        err
    }
}
