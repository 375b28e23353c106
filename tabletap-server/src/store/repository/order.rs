//! Order Repository
//!
//! Owns the order lifecycle: creation from a drained cart, status
//! advancement, and the queries the dashboard polls.

use super::{RepoError, RepoResult};
use crate::store::{EntityKind, KvStore};
use crate::utils::time::{now_millis, order_token};
use shared::models::DiningTable;
use shared::order::{Cart, CartItem, Order, OrderStatus};

#[derive(Clone)]
pub struct OrderRepository {
    store: KvStore,
}

impl OrderRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// All orders for `owner`, oldest first
    pub fn find_all(&self, owner: &str) -> RepoResult<Vec<Order>> {
        Ok(self.store.read_collection(EntityKind::Orders, owner)?)
    }

    /// Orders still waiting for the kitchen (`status = new`)
    pub fn find_new(&self, owner: &str) -> RepoResult<Vec<Order>> {
        Ok(self
            .find_all(owner)?
            .into_iter()
            .filter(|order| order.status == OrderStatus::New)
            .collect())
    }

    /// Find an order by id
    pub fn find_by_id(&self, owner: &str, id: &str) -> RepoResult<Option<Order>> {
        Ok(self.find_all(owner)?.into_iter().find(|o| o.id == id))
    }

    /// Create an order from submitted cart lines.
    ///
    /// The lines are value snapshots from this point on - later menu
    /// edits never touch them. The table reference is checked at write
    /// time so a dangling `table_id` is rejected instead of persisted.
    pub fn create(&self, owner: &str, table_id: &str, lines: Vec<CartItem>) -> RepoResult<Order> {
        if lines.is_empty() {
            return Err(RepoError::Validation("Cart is empty".to_string()));
        }

        let tables: Vec<DiningTable> = self.store.read_collection(EntityKind::Tables, owner)?;
        if !tables.iter().any(|table| table.id == table_id) {
            return Err(RepoError::NotFound(format!(
                "Table {} not found",
                table_id
            )));
        }

        let order = Order::place(order_token(), table_id.to_string(), lines, now_millis());

        let mut orders = self.find_all(owner)?;
        orders.push(order.clone());
        self.store
            .write_collection(EntityKind::Orders, owner, &orders)?;
        Ok(order)
    }

    /// Convenience for in-process callers: drain `cart` into an order.
    pub fn create_from_cart(&self, owner: &str, table_id: &str, cart: &mut Cart) -> RepoResult<Order> {
        let order = self.create(owner, table_id, cart.lines().to_vec())?;
        cart.clear();
        Ok(order)
    }

    /// Advance an order one step to `target`.
    ///
    /// Only the immediate successor status is accepted; everything else
    /// (skip, repeat, backwards, advancing a served order) is rejected
    /// and the collection is left untouched.
    pub fn advance(&self, owner: &str, id: &str, target: OrderStatus) -> RepoResult<Order> {
        let mut orders = self.find_all(owner)?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        order.status = order.status.advance_to(target)?;
        let updated = order.clone();

        self.store
            .write_collection(EntityKind::Orders, owner, &orders)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::repository::{DiningTableRepository, MenuItemRepository};
    use rust_decimal::Decimal;
    use shared::models::{DiningTableCreate, MenuItemCreate, MenuItemUpdate};

    struct Fixture {
        orders: OrderRepository,
        tables: DiningTableRepository,
        menu: MenuItemRepository,
        table_id: String,
    }

    fn fixture() -> Fixture {
        let store = KvStore::open_in_memory().unwrap();
        let tables = DiningTableRepository::new(store.clone());
        let table = tables
            .create("r1", DiningTableCreate { number: 5 })
            .unwrap();
        Fixture {
            orders: OrderRepository::new(store.clone()),
            tables,
            menu: MenuItemRepository::new(store),
            table_id: table.id,
        }
    }

    fn burger_cart(fix: &Fixture) -> (String, Cart) {
        let item = fix
            .menu
            .create(
                "r1",
                MenuItemCreate {
                    name: "Burger".to_string(),
                    price: "9.5".parse().unwrap(),
                    category: "Mains".to_string(),
                },
            )
            .unwrap();
        let mut cart = Cart::new();
        cart.add(&item);
        cart.add(&item);
        (item.id, cart)
    }

    #[test]
    fn create_snapshots_cart_and_clears_it() {
        let fix = fixture();
        let (_, mut cart) = burger_cart(&fix);

        let order = fix
            .orders
            .create_from_cart("r1", &fix.table_id, &mut cart)
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total(), "19.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn identical_carts_produce_distinct_orders_with_equal_items() {
        let fix = fixture();
        let (_, cart) = burger_cart(&fix);

        let first = fix
            .orders
            .create("r1", &fix.table_id, cart.lines().to_vec())
            .unwrap();
        let second = fix
            .orders
            .create("r1", &fix.table_id, cart.lines().to_vec())
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.items, second.items);
        assert_eq!(fix.orders.find_all("r1").unwrap().len(), 2);
    }

    #[test]
    fn empty_cart_is_rejected_and_nothing_is_written() {
        let fix = fixture();
        let err = fix
            .orders
            .create("r1", &fix.table_id, Vec::new())
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(fix.orders.find_all("r1").unwrap().is_empty());
    }

    #[test]
    fn unknown_table_is_rejected() {
        let fix = fixture();
        let (_, cart) = burger_cart(&fix);

        let err = fix
            .orders
            .create("r1", "missing", cart.lines().to_vec())
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert!(fix.orders.find_all("r1").unwrap().is_empty());
    }

    #[test]
    fn advances_forward_and_persists_each_step() {
        let fix = fixture();
        let (_, cart) = burger_cart(&fix);
        let order = fix
            .orders
            .create("r1", &fix.table_id, cart.lines().to_vec())
            .unwrap();

        for target in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Served] {
            let updated = fix.orders.advance("r1", &order.id, target).unwrap();
            assert_eq!(updated.status, target);
            let persisted = fix.orders.find_by_id("r1", &order.id).unwrap().unwrap();
            assert_eq!(persisted.status, target);
        }
    }

    #[test]
    fn rejects_non_adjacent_and_terminal_transitions() {
        let fix = fixture();
        let (_, cart) = burger_cart(&fix);
        let order = fix
            .orders
            .create("r1", &fix.table_id, cart.lines().to_vec())
            .unwrap();

        // Skipping straight to ready
        assert!(matches!(
            fix.orders.advance("r1", &order.id, OrderStatus::Ready),
            Err(RepoError::Transition(_))
        ));

        fix.orders
            .advance("r1", &order.id, OrderStatus::Preparing)
            .unwrap();
        fix.orders
            .advance("r1", &order.id, OrderStatus::Ready)
            .unwrap();
        fix.orders
            .advance("r1", &order.id, OrderStatus::Served)
            .unwrap();

        // Re-advancing a served order
        assert!(matches!(
            fix.orders.advance("r1", &order.id, OrderStatus::Served),
            Err(RepoError::Transition(_))
        ));
        let persisted = fix.orders.find_by_id("r1", &order.id).unwrap().unwrap();
        assert_eq!(persisted.status, OrderStatus::Served);
    }

    #[test]
    fn later_menu_edits_do_not_alter_historical_orders() {
        let fix = fixture();
        let (item_id, cart) = burger_cart(&fix);
        let order = fix
            .orders
            .create("r1", &fix.table_id, cart.lines().to_vec())
            .unwrap();

        fix.menu
            .update(
                "r1",
                &item_id,
                MenuItemUpdate {
                    name: Some("Double Burger".to_string()),
                    price: Some("15".parse().unwrap()),
                    category: None,
                },
            )
            .unwrap();
        fix.menu.delete("r1", &item_id).unwrap();

        let persisted = fix.orders.find_by_id("r1", &order.id).unwrap().unwrap();
        assert_eq!(persisted.items[0].name, "Burger");
        assert_eq!(persisted.items[0].price, "9.5".parse().unwrap());
    }

    #[test]
    fn find_new_filters_by_status() {
        let fix = fixture();
        let (_, cart) = burger_cart(&fix);
        let first = fix
            .orders
            .create("r1", &fix.table_id, cart.lines().to_vec())
            .unwrap();
        fix.orders
            .create("r1", &fix.table_id, cart.lines().to_vec())
            .unwrap();

        fix.orders
            .advance("r1", &first.id, OrderStatus::Preparing)
            .unwrap();

        let fresh = fix.orders.find_new("r1").unwrap();
        assert_eq!(fresh.len(), 1);
        assert_ne!(fresh[0].id, first.id);
    }
}
