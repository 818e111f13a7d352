use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a saved delivery address
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Address {
    /// Unique identifier for the address
    pub address_id: String,
    /// Street line of the address
    pub street: String,
    /// Optional apartment, flat, or unit number
    pub apartment: Option<String>,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub zip_code: String,
    /// Optional landmark to help the delivery rider
    pub landmark: Option<String>,
    /// Whether this is the default delivery address
    pub is_default: bool,
}

impl Address {
    /// Creates a new Address with required fields
    pub fn new(street: String, city: String, state: String, zip_code: String) -> Self {
        Self {
            address_id: Uuid::new_v4().to_string(),
            street,
            apartment: None,
            city,
            state,
            zip_code,
            landmark: None,
            is_default: false,
        }
    }

    /// Sets the apartment or unit number
    pub fn with_apartment(mut self, apartment: String) -> Self {
        self.apartment = Some(apartment);
        self
    }

    /// Sets the landmark
    pub fn with_landmark(mut self, landmark: String) -> Self {
        self.landmark = Some(landmark);
        self
    }

    /// Marks this address as the default
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}
