//! Common data types and enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkout stage enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    /// Cart is visible and the user may still adjust quantities
    Reviewing,
    /// A delivery address must be chosen before proceeding
    SelectingAddress,
    /// A payment method must be chosen before proceeding
    SelectingPayment,
    /// The order has been sent and a response is awaited
    Submitting,
    /// The order was accepted; the cart has been cleared
    Succeeded,
    /// The last submission failed; the user may retry
    Failed,
}

impl CheckoutStage {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStage::Reviewing => "reviewing",
            CheckoutStage::SelectingAddress => "selecting_address",
            CheckoutStage::SelectingPayment => "selecting_payment",
            CheckoutStage::Submitting => "submitting",
            CheckoutStage::Succeeded => "succeeded",
            CheckoutStage::Failed => "failed",
        }
    }

    /// Converts a string to a CheckoutStage enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reviewing" => Some(CheckoutStage::Reviewing),
            "selecting_address" => Some(CheckoutStage::SelectingAddress),
            "selecting_payment" => Some(CheckoutStage::SelectingPayment),
            "submitting" => Some(CheckoutStage::Submitting),
            "succeeded" => Some(CheckoutStage::Succeeded),
            "failed" => Some(CheckoutStage::Failed),
            _ => None,
        }
    }

    /// Returns true once the checkout can no longer accept input
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckoutStage::Succeeded)
    }
}

/// Payment method enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// UPI payment authorized through an external gateway
    Upi,
    /// Cash on delivery, settled at the door
    Cod,
}

impl PaymentMethod {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Cod => "cod",
        }
    }

    /// Converts a string to a PaymentMethod enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upi" => Some(PaymentMethod::Upi),
            "cod" => Some(PaymentMethod::Cod),
            _ => None,
        }
    }

    /// Returns true when the method requires a gateway authorization step
    pub fn requires_gateway(&self) -> bool {
        matches!(self, PaymentMethod::Upi)
    }
}

/// Checkout precondition that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    /// Cart is empty
    Cart,
    /// No delivery address selected
    Address,
    /// No payment method selected
    PaymentMethod,
    /// Contact phone missing or too short
    ContactPhone,
}

impl ValidationField {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationField::Cart => "cart",
            ValidationField::Address => "address",
            ValidationField::PaymentMethod => "payment_method",
            ValidationField::ContactPhone => "contact_phone",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a gateway authorization did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentErrorKind {
    /// The user dismissed the gateway flow
    UserCancelled,
    /// The gateway processed the request and declined it
    GatewayDeclined,
    /// The gateway could not be reached or errored out
    GatewayUnavailable,
}

impl PaymentErrorKind {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentErrorKind::UserCancelled => "user_cancelled",
            PaymentErrorKind::GatewayDeclined => "gateway_declined",
            PaymentErrorKind::GatewayUnavailable => "gateway_unavailable",
        }
    }
}

impl fmt::Display for PaymentErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
