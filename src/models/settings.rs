use serde::{Deserialize, Serialize};

/// Store-wide settings supplied by the remote Settings Service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Flat delivery charge applied to every order
    pub delivery_charge: f64,
    /// Tax rate in percent, applied to the items subtotal only
    pub tax_rate: f64,
}

impl StoreSettings {
    /// Creates new StoreSettings
    pub fn new(delivery_charge: f64, tax_rate: f64) -> Self {
        Self {
            delivery_charge,
            tax_rate,
        }
    }
}
