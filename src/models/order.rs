use crate::models::{Address, CartLine, PaymentDetails};
use serde::{Deserialize, Serialize};

/// One item row inside an order payload
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Identifier of the menu item
    pub menu_item_id: String,
    /// Quantity ordered
    pub quantity: u32,
    /// Unit price captured when the item was added to the cart
    pub price: f64,
    /// Optional portion variant
    pub portion: Option<String>,
}

impl OrderLine {
    /// Creates a new OrderLine
    pub fn new(menu_item_id: String, quantity: u32, price: f64) -> Self {
        Self {
            menu_item_id,
            quantity,
            price,
            portion: None,
        }
    }

    /// Sets the portion variant
    pub fn with_portion(mut self, portion: String) -> Self {
        self.portion = Some(portion);
        self
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            menu_item_id: line.item.item_id.clone(),
            quantity: line.quantity,
            price: line.item.price,
            portion: line.item.portion.clone(),
        }
    }
}

/// The outbound order representation sent to the Order Service
///
/// A pure projection of the cart and checkout state at submission time;
/// it owns nothing and is discarded after the call completes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderSubmission {
    /// Items being ordered
    pub items: Vec<OrderLine>,
    /// Delivery address fields
    pub delivery_address: Address,
    /// Payment method tag (e.g., "upi", "cod")
    pub payment_method: String,
    /// Gateway transaction details when the method was paid up front
    pub payment_details: Option<PaymentDetails>,
    /// Contact phone for the delivery rider
    pub contact_phone: String,
    /// Client-generated reference, stable across retries of one checkout session
    pub client_reference: String,
}

impl OrderSubmission {
    /// Creates a new OrderSubmission with required fields
    pub fn new(
        items: Vec<OrderLine>,
        delivery_address: Address,
        payment_method: String,
        contact_phone: String,
        client_reference: String,
    ) -> Self {
        Self {
            items,
            delivery_address,
            payment_method,
            payment_details: None,
            contact_phone,
            client_reference,
        }
    }

    /// Attaches gateway transaction details
    pub fn with_payment_details(mut self, details: PaymentDetails) -> Self {
        self.payment_details = Some(details);
        self
    }

    /// Total quantity across all item rows
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

/// Server-computed pricing breakdown; the source of truth for final amounts
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderPricing {
    /// Items subtotal as priced by the server
    pub items_total: f64,
    /// Delivery fee charged
    pub delivery_fee: f64,
    /// Tax charged
    pub tax: f64,
    /// Discount applied, if any
    pub discount: f64,
    /// Final amount to collect; callers must display this figure
    pub final_amount: f64,
}

/// Confirmation returned by the Order Service on successful creation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderConfirmation {
    /// Service-assigned order number
    pub order_number: String,
    /// Server-computed pricing breakdown
    pub pricing: OrderPricing,
}

/// An order as returned by the order-listing endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Order {
    /// Unique identifier for the order
    pub order_id: String,
    /// Human-facing order number
    pub order_number: String,
    /// Items in the order
    pub items: Vec<OrderLine>,
    /// Current status of the order (e.g., "placed", "preparing", "delivered")
    pub status: String,
    /// Server-computed pricing breakdown
    pub pricing: OrderPricing,
    /// Unix timestamp when the order was created
    pub created_timestamp: u64,
}
