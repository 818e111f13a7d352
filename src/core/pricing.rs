//! Checkout-time price calculation

use crate::models::StoreSettings;
use serde::{Deserialize, Serialize};

/// Monetary breakdown for a cart at checkout time
///
/// The grand total is an estimate; the Order Service returns the
/// authoritative figure with the confirmation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Items subtotal from the cart
    pub items_total: f64,
    /// Flat delivery fee from store settings
    pub delivery_fee: f64,
    /// Tax on the items subtotal; the delivery fee is not taxed
    pub tax_amount: f64,
    /// Sum of the three components above
    pub grand_total: f64,
}

impl PriceBreakdown {
    /// Computes the breakdown from an items subtotal and optional settings
    ///
    /// When settings have not arrived yet the delivery fee and tax default
    /// to zero and the grand total degrades to the items subtotal.
    pub fn compute(items_total: f64, settings: Option<&StoreSettings>) -> Self {
        let (delivery_fee, tax_rate) = match settings {
            Some(s) => (s.delivery_charge, s.tax_rate),
            None => (0.0, 0.0),
        };

        let tax_amount = items_total * tax_rate / 100.0;

        Self {
            items_total,
            delivery_fee,
            tax_amount,
            grand_total: items_total + delivery_fee + tax_amount,
        }
    }
}
