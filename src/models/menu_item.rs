use serde::{Deserialize, Serialize};

/// Represents a menu item that can be added to the cart
///
/// Two records with the same `item_id` but different `portion` values are
/// distinct purchasable variants with their own price.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Unique identifier for the item
    pub item_id: String,
    /// Name of the item
    pub name: String,
    /// Unit price of the item
    pub price: f64,
    /// Optional portion variant (e.g., "half", "full")
    pub portion: Option<String>,
    /// Whether the item can currently be ordered
    pub available: bool,
    /// Optional description of the item
    pub description: Option<String>,
    /// Optional category (e.g., "starters", "beverages")
    pub category: Option<String>,
}

impl MenuItem {
    /// Creates a new MenuItem with required fields
    pub fn new(item_id: String, name: String, price: f64) -> Self {
        Self {
            item_id,
            name,
            price,
            portion: None,
            available: true,
            description: None,
            category: None,
        }
    }

    /// Sets the portion variant of the item
    pub fn with_portion(mut self, portion: String) -> Self {
        self.portion = Some(portion);
        self
    }

    /// Sets the availability of the item
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sets the description of the item
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the category of the item
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns true when `other` is the same purchasable variant
    pub fn same_variant(&self, item_id: &str, portion: Option<&str>) -> bool {
        self.item_id == item_id && self.portion.as_deref() == portion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_builder() {
        let item = MenuItem::new("item-42".to_string(), "Paneer Tikka".to_string(), 180.0)
            .with_portion("half".to_string())
            .with_description("Char-grilled cottage cheese".to_string())
            .with_category("starters".to_string())
            .with_availability(false);

        assert_eq!(item.item_id, "item-42");
        assert_eq!(item.name, "Paneer Tikka");
        assert_eq!(item.price, 180.0);
        assert_eq!(item.portion, Some("half".to_string()));
        assert!(!item.available);
        assert_eq!(item.category, Some("starters".to_string()));
    }

    #[test]
    fn test_same_variant_distinguishes_portions() {
        let half = MenuItem::new("item-42".to_string(), "Paneer Tikka".to_string(), 180.0)
            .with_portion("half".to_string());

        assert!(half.same_variant("item-42", Some("half")));
        assert!(!half.same_variant("item-42", Some("full")));
        assert!(!half.same_variant("item-42", None));
        assert!(!half.same_variant("item-7", Some("half")));
    }
}
