//! Polling fallback for new-order detection
//!
//! Compatibility mode behind the broadcast channel: every tick (10
//! seconds by default) re-reads the order collections of every owner
//! with a live session and publishes a one-shot
//! [`OrderNotification::NewOrders`] for orders it has not announced
//! before.
//!
//! At-most-once per order and per mode - an order announced here may
//! also have been announced by the primary `OrderPlaced` publish;
//! consumers pick one mode. Orders placed and advanced between two
//! ticks are never announced by this path, which is the polling
//! protocol's accepted blind spot.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::SessionService;
use crate::orders::notify::{OrderNotification, OrderNotifier};
use crate::store::repository::OrderRepository;

pub struct OrderWatcher {
    orders: OrderRepository,
    sessions: SessionService,
    notifier: OrderNotifier,
    /// Order ids already announced by this watcher
    seen: HashSet<String>,
}

impl OrderWatcher {
    pub fn new(orders: OrderRepository, sessions: SessionService, notifier: OrderNotifier) -> Self {
        Self {
            orders,
            sessions,
            notifier,
            seen: HashSet::new(),
        }
    }

    /// One poll pass over every active owner.
    ///
    /// Returns how many orders were newly announced.
    pub fn tick(&mut self) -> usize {
        let mut announced = 0;
        for owner in self.sessions.active_owners() {
            let fresh = match self.orders.find_new(&owner) {
                Ok(orders) => orders,
                Err(e) => {
                    tracing::warn!(owner = %owner, error = %e, "Order poll failed");
                    continue;
                }
            };

            let unseen: Vec<String> = fresh
                .into_iter()
                .map(|order| order.id)
                .filter(|id| !self.seen.contains(id))
                .collect();
            if unseen.is_empty() {
                continue;
            }

            let count = unseen.len();
            self.seen.extend(unseen);
            announced += count;

            tracing::info!(owner = %owner, count, "New order(s) detected by poll");
            self.notifier.publish(OrderNotification::NewOrders {
                restaurant_id: owner,
                count,
            });
        }
        announced
    }

    /// Poll until `shutdown` fires.
    pub async fn run(mut self, interval: Duration, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(interval);
        // The immediate first tick would announce orders the dashboard
        // already rendered at load; skip it.
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::debug!("Order watcher stopping");
                    break;
                }
                _ = ticker.tick() => {
                    self.tick();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KvStore;
    use crate::store::repository::{DiningTableRepository, MenuItemRepository};
    use shared::models::{DiningTableCreate, MenuItemCreate};
    use shared::order::{Cart, OrderStatus};

    struct Fixture {
        watcher: OrderWatcher,
        store: KvStore,
        orders: OrderRepository,
        table_id: String,
        owner: String,
    }

    fn fixture() -> Fixture {
        let store = KvStore::open_in_memory().unwrap();
        let sessions = SessionService::new();
        let (_token, session) = sessions.issue("owner@example.com", "Restaurant Owner");
        let owner = session.id;

        let table = DiningTableRepository::new(store.clone())
            .create(&owner, DiningTableCreate { number: 1 })
            .unwrap();
        let orders = OrderRepository::new(store.clone());
        let watcher = OrderWatcher::new(orders.clone(), sessions, OrderNotifier::new());

        Fixture {
            watcher,
            store,
            orders,
            table_id: table.id,
            owner,
        }
    }

    fn place_order(fix: &Fixture) -> String {
        let item = MenuItemRepository::new(fix.store.clone())
            .create(
                &fix.owner,
                MenuItemCreate {
                    name: "Burger".to_string(),
                    price: "9.5".parse().unwrap(),
                    category: "Mains".to_string(),
                },
            )
            .unwrap();
        let mut cart = Cart::new();
        cart.add(&item);
        fix.orders
            .create_from_cart(&fix.owner, &fix.table_id, &mut cart)
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn announces_each_new_order_exactly_once() {
        let mut fix = fixture();
        let mut rx = fix.watcher.notifier.subscribe();

        place_order(&fix);
        assert_eq!(fix.watcher.tick(), 1);
        match rx.recv().await.unwrap() {
            OrderNotification::NewOrders {
                restaurant_id,
                count,
            } => {
                assert_eq!(restaurant_id, fix.owner);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected notification: {:?}", other),
        }

        // Same orders, second tick: silence
        assert_eq!(fix.watcher.tick(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn advanced_orders_are_not_announced() {
        let mut fix = fixture();
        let order_id = place_order(&fix);
        fix.orders
            .advance(&fix.owner, &order_id, OrderStatus::Preparing)
            .unwrap();

        assert_eq!(fix.watcher.tick(), 0);
    }

    #[tokio::test]
    async fn owners_without_sessions_are_ignored() {
        let mut fix = fixture();
        // An order for an owner nobody is logged in as
        let store = fix.store.clone();
        let table = DiningTableRepository::new(store.clone())
            .create("ghost", DiningTableCreate { number: 9 })
            .unwrap();
        let item = MenuItemRepository::new(store)
            .create(
                "ghost",
                MenuItemCreate {
                    name: "Pizza".to_string(),
                    price: "12".parse().unwrap(),
                    category: "Mains".to_string(),
                },
            )
            .unwrap();
        let mut cart = Cart::new();
        cart.add(&item);
        fix.orders
            .create_from_cart("ghost", &table.id, &mut cart)
            .unwrap();

        assert_eq!(fix.watcher.tick(), 0);
    }
}
