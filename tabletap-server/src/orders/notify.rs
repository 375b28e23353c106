//! In-process order notification channel

use serde::Serialize;
use tokio::sync::broadcast;

/// Default broadcast buffer; slow subscribers see `Lagged` past this
const CHANNEL_CAPACITY: usize = 64;

/// A dashboard-facing order notification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderNotification {
    /// Published the moment a customer submission is persisted
    OrderPlaced {
        restaurant_id: String,
        order_id: String,
        table_id: String,
    },
    /// Published by the polling fallback: `count` orders still `new`
    NewOrders { restaurant_id: String, count: usize },
}

impl OrderNotification {
    /// Owner the notification is addressed to
    pub fn restaurant_id(&self) -> &str {
        match self {
            OrderNotification::OrderPlaced { restaurant_id, .. } => restaurant_id,
            OrderNotification::NewOrders { restaurant_id, .. } => restaurant_id,
        }
    }
}

/// Publish/subscribe handle over a tokio broadcast channel
#[derive(Clone)]
pub struct OrderNotifier {
    tx: broadcast::Sender<OrderNotification>,
}

impl OrderNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish to all current subscribers. No subscribers is not an
    /// error - the notification is simply dropped.
    pub fn publish(&self, notification: OrderNotification) {
        let receivers = self.tx.receiver_count();
        if self.tx.send(notification.clone()).is_err() {
            tracing::debug!(?notification, "Order notification dropped (no subscribers)");
        } else {
            tracing::debug!(?notification, receivers, "Order notification published");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderNotification> {
        self.tx.subscribe()
    }
}

impl Default for OrderNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_notifications() {
        let notifier = OrderNotifier::new();
        let mut rx = notifier.subscribe();

        let placed = OrderNotification::OrderPlaced {
            restaurant_id: "r1".to_string(),
            order_id: "100".to_string(),
            table_id: "t1".to_string(),
        };
        notifier.publish(placed.clone());

        assert_eq!(rx.recv().await.unwrap(), placed);
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_a_noop() {
        let notifier = OrderNotifier::new();
        notifier.publish(OrderNotification::NewOrders {
            restaurant_id: "r1".to_string(),
            count: 1,
        });
        // A subscriber attached afterwards starts empty
        let mut rx = notifier.subscribe();
        assert!(rx.try_recv().is_err());
    }
}
