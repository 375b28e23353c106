//! Server state

use std::time::Duration;

use crate::auth::SessionService;
use crate::core::tasks::{BackgroundTasks, TaskKind};
use crate::core::{Config, Result};
use crate::orders::{OrderNotifier, OrderWatcher};
use crate::store::KvStore;
use crate::store::repository::OrderRepository;

/// Shared application state
///
/// Cloneable aggregate handed to every handler. All fields are cheap to
/// clone - the store and session registry are `Arc`-backed.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | store | redb collection store |
/// | sessions | Bearer-token session registry |
/// | notifier | Order notification channel |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: KvStore,
    pub sessions: SessionService,
    pub notifier: OrderNotifier,
}

impl ServerState {
    /// Open the store under the configured working directory and build
    /// the state
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let store = KvStore::open(config.db_path())?;
        tracing::info!(path = %config.db_path().display(), "Store opened");

        Ok(Self {
            config: config.clone(),
            store,
            sessions: SessionService::new(),
            notifier: OrderNotifier::new(),
        })
    }

    /// Start the background tasks and hand back their manager.
    ///
    /// Currently one task: the new-order poll fallback.
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        let watcher = OrderWatcher::new(
            OrderRepository::new(self.store.clone()),
            self.sessions.clone(),
            self.notifier.clone(),
        );
        let interval = Duration::from_secs(self.config.poll_interval_secs.max(1));
        let shutdown = tasks.shutdown_token();
        tasks.spawn(
            "order_watcher",
            TaskKind::Periodic,
            watcher.run(interval, shutdown),
        );

        tasks
    }
}
