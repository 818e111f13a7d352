pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

/// Re-export important types for easier access
pub use crate::models::{
    Address, CartLine, MenuItem, Order, OrderConfirmation, OrderPricing, OrderSubmission,
    PaymentDetails, StoreSettings,
};

pub use crate::core::cart::Cart;
pub use crate::core::checkout::Checkout;
pub use crate::core::error::Error;
pub use crate::core::pricing::PriceBreakdown;
pub use crate::core::types::{CheckoutStage, PaymentErrorKind, PaymentMethod, ValidationField};

/// Result type used throughout the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
