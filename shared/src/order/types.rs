//! Order entity and line snapshots

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::status::OrderStatus;

/// Order line - a value snapshot of a cart entry.
///
/// Decoupled from the live menu item on purpose: editing or deleting a
/// menu item later must not alter historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu item id at order time (may dangle once the item is deleted)
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Price per unit at order time
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<CartItem> for OrderLine {
    fn from(item: CartItem) -> Self {
        OrderLine {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Order entity
///
/// Created once by a customer submission; afterwards only `status` ever
/// changes, and only forward. Persisted with camelCase field names
/// (`tableId`), matching what dashboard clients consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Timestamp-derived token, unique within the owning restaurant
    pub id: String,
    /// Table reference from the QR link
    pub table_id: String,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    /// Creation time, Unix millis
    pub timestamp: i64,
}

impl Order {
    /// Snapshot `lines` into a fresh order with `status = new`.
    pub fn place(id: String, table_id: String, lines: Vec<CartItem>, timestamp: i64) -> Self {
        Order {
            id,
            table_id,
            items: lines.into_iter().map(OrderLine::from).collect(),
            status: OrderStatus::New,
            timestamp,
        }
    }

    /// Order total
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;
    use crate::order::Cart;

    fn sample_cart() -> Cart {
        let item = MenuItem {
            id: "1".to_string(),
            name: "Burger".to_string(),
            price: "9.5".parse().unwrap(),
            category: "Mains".to_string(),
        };
        let mut cart = Cart::new();
        cart.add(&item);
        cart.add(&item);
        cart
    }

    #[test]
    fn place_snapshots_cart_lines() {
        let mut cart = sample_cart();
        let order = Order::place("100".into(), "t-1".into(), cart.drain(), 100);

        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].price, "9.5".parse::<Decimal>().unwrap());
        assert_eq!(order.total(), "19.00".parse::<Decimal>().unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn persists_with_camel_case_table_id() {
        let mut cart = sample_cart();
        let order = Order::place("100".into(), "t-1".into(), cart.drain(), 100);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["tableId"], "t-1");
        assert_eq!(json["status"], "new");
        assert_eq!(json["items"][0]["price"], 9.5);

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
