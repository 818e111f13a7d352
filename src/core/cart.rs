//! In-memory cart store
//!
//! The cart owns an insertion-ordered collection of lines, one per distinct
//! (item, portion) pair. Every operation is synchronous and total; there is
//! no failure mode. Quantities are never persisted at zero, so removing and
//! setting a quantity of zero are the same operation.

use crate::models::{CartLine, MenuItem};

/// In-memory cart for the active ordering session
#[derive(Debug, Clone, Default)]
pub struct Cart {
    /// Lines in insertion order
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty Cart
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Adds a menu item to the cart
    ///
    /// If a line for the same (item_id, portion) pair already exists its
    /// quantity is incremented; otherwise a new line is created with a fresh
    /// line id. Callers are responsible for passing a positive quantity.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) {
        let portion = item.portion.as_deref();

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(&item.item_id, portion))
        {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::new(item.clone(), quantity));
        }
    }

    /// Removes lines matching the given item id
    ///
    /// When a portion is given only that variant is removed; otherwise every
    /// portion of the item is removed. A no-op when nothing matches.
    pub fn remove_item(&mut self, item_id: &str, portion: Option<&str>) {
        match portion {
            Some(p) => self.lines.retain(|line| !line.matches(item_id, Some(p))),
            None => self.lines.retain(|line| line.item.item_id != item_id),
        }
    }

    /// Sets the quantity of the matching line
    ///
    /// A quantity of zero behaves as `remove_item`.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32, portion: Option<&str>) {
        if quantity == 0 {
            self.remove_item(item_id, portion);
            return;
        }

        for line in self
            .lines
            .iter_mut()
            .filter(|line| line.matches(item_id, portion))
        {
            line.quantity = quantity;
        }
    }

    /// Empties the cart unconditionally
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the quantity of the matching line, or 0 if none exists
    ///
    /// A `None` portion matches only lines whose item has no portion; for
    /// items with portion variants the caller must name the variant.
    pub fn quantity_of(&self, item_id: &str, portion: Option<&str>) -> u32 {
        self.lines
            .iter()
            .find(|line| line.matches(item_id, portion))
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Sum of quantities across all lines
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Items subtotal: sum over lines of captured price times quantity
    pub fn items_total(&self) -> f64 {
        self.lines.iter().map(|line| line.line_total()).sum()
    }

    /// Returns true when the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order, for display
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_item(id: &str, price: f64) -> MenuItem {
        MenuItem::new(id.to_string(), format!("Item {}", id), price)
    }

    fn portion_item(id: &str, portion: &str, price: f64) -> MenuItem {
        plain_item(id, price).with_portion(portion.to_string())
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        let item = portion_item("A", "full", 100.0);

        cart.add_item(&item, 1);
        cart.add_item(&item, 2);
        cart.add_item(&item, 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("A", Some("full")), 4);
    }

    #[test]
    fn test_portions_are_distinct_lines() {
        let mut cart = Cart::new();

        cart.add_item(&portion_item("A", "full", 100.0), 2);
        cart.add_item(&portion_item("A", "half", 60.0), 1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.quantity_of("A", Some("full")), 2);
        assert_eq!(cart.quantity_of("A", Some("half")), 1);
        assert_eq!(cart.items_total(), 260.0);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let item = portion_item("A", "half", 60.0);

        cart.add_item(&item, 3);
        cart.set_quantity("A", 0, Some("half"));

        assert_eq!(cart.quantity_of("A", Some("half")), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = Cart::new();
        let item = plain_item("B", 50.0);

        cart.add_item(&item, 1);
        cart.set_quantity("B", 5, None);

        assert_eq!(cart.quantity_of("B", None), 5);
        assert_eq!(cart.items_total(), 250.0);
    }

    #[test]
    fn test_remove_without_portion_drops_all_variants() {
        let mut cart = Cart::new();

        cart.add_item(&portion_item("A", "full", 100.0), 1);
        cart.add_item(&portion_item("A", "half", 60.0), 1);
        cart.add_item(&plain_item("B", 50.0), 1);

        cart.remove_item("A", None);

        assert_eq!(cart.quantity_of("A", Some("full")), 0);
        assert_eq!(cart.quantity_of("A", Some("half")), 0);
        assert_eq!(cart.quantity_of("B", None), 1);
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&plain_item("B", 50.0), 2);

        cart.remove_item("missing", None);

        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&plain_item("B", 50.0), 2);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.items_total(), 0.0);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_portionless_lookup_does_not_match_variants() {
        let mut cart = Cart::new();
        cart.add_item(&portion_item("A", "full", 100.0), 2);

        assert_eq!(cart.quantity_of("A", None), 0);
        assert_eq!(cart.quantity_of("A", Some("full")), 2);
    }
}
