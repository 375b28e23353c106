//! Customer cart
//!
//! Transient, session-local state: the cart only exists between the
//! customer opening the menu and submitting an order. Nothing here is
//! persisted - submission drains the cart into order line snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// A menu item plus the selected quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Price per unit, snapshotted from the menu at add time
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub quantity: u32,
}

impl CartItem {
    /// Line total (`price * quantity`)
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Customer cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`.
    ///
    /// Adding an item already in the cart bumps its quantity instead of
    /// appending a second line.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += 1;
            return;
        }
        self.items.push(CartItem {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            category: item.category.clone(),
            quantity: 1,
        });
    }

    /// Remove the whole line for `item_id` (not a single unit).
    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|line| line.id != item_id);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    /// Total unit count across all lines (the badge on the cart button)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Cart total
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Drain the cart for order submission, leaving it empty.
    pub fn drain(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> MenuItem {
        MenuItem {
            id: "1".to_string(),
            name: "Burger".to_string(),
            price: "9.5".parse().unwrap(),
            category: "Mains".to_string(),
        }
    }

    #[test]
    fn adding_same_item_twice_merges_quantity() {
        let mut cart = Cart::new();
        cart.add(&burger());
        cart.add(&burger());

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), "19.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn remove_drops_the_whole_line() {
        let mut cart = Cart::new();
        cart.add(&burger());
        cart.add(&burger());
        cart.remove("1");

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn drain_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(&burger());

        let lines = cart.drain();
        assert_eq!(lines.len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn removing_unknown_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(&burger());
        cart.remove("no-such-item");
        assert_eq!(cart.item_count(), 1);
    }
}
