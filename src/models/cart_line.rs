use crate::models::MenuItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents one row in the cart: a unique (item, portion) pair and its quantity
///
/// The item is a snapshot taken at the time of adding; later menu price
/// changes do not retroactively alter cart totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Synthetic identifier, unique per (item, portion) pair at creation time
    pub line_id: String,
    /// Snapshot of the menu item at the time it was added
    pub item: MenuItem,
    /// Quantity of the item, at least 1 while the line exists
    pub quantity: u32,
}

impl CartLine {
    /// Creates a new CartLine with a fresh line id
    pub fn new(item: MenuItem, quantity: u32) -> Self {
        Self {
            line_id: Uuid::new_v4().to_string(),
            item,
            quantity,
        }
    }

    /// Total price of this line
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }

    /// Returns true when this line holds the given purchasable variant
    pub fn matches(&self, item_id: &str, portion: Option<&str>) -> bool {
        self.item.same_variant(item_id, portion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = MenuItem::new("item-1".to_string(), "Masala Dosa".to_string(), 90.0);
        let line = CartLine::new(item, 3);

        assert_eq!(line.quantity, 3);
        assert_eq!(line.line_total(), 270.0);
    }

    #[test]
    fn test_fresh_line_ids() {
        let item = MenuItem::new("item-1".to_string(), "Masala Dosa".to_string(), 90.0);
        let a = CartLine::new(item.clone(), 1);
        let b = CartLine::new(item, 1);

        assert_ne!(a.line_id, b.line_id);
    }
}
