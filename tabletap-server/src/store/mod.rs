//! redb-based storage layer
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `menu_items` | owner id | JSON `Vec<MenuItem>` |
//! | `tables` | owner id | JSON `Vec<DiningTable>` |
//! | `orders` | owner id | JSON `Vec<Order>` |
//!
//! Each value is the owner's *entire* collection serialized as one JSON
//! blob. There is deliberately no partial-update API: every mutation is
//! a full read-modify-write, and a write fully replaces the prior blob.
//! Concurrent writers race with last-write-wins; the store is
//! single-writer in normal use and no merge is attempted.
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns and the
//! database file is always in a consistent state, which is all this store
//! promises.

pub mod repository;

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Menu item collections: key = owner id, value = JSON-serialized `Vec<MenuItem>`
const MENU_ITEMS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("menu_items");

/// Dining table collections: key = owner id, value = JSON-serialized `Vec<DiningTable>`
const TABLES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("tables");

/// Order collections: key = owner id, value = JSON-serialized `Vec<Order>`
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Entity kind - the first half of every storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    MenuItems,
    Tables,
    Orders,
}

impl EntityKind {
    fn table(self) -> TableDefinition<'static, &'static str, &'static [u8]> {
        match self {
            EntityKind::MenuItems => MENU_ITEMS_TABLE,
            EntityKind::Tables => TABLES_TABLE,
            EntityKind::Orders => ORDERS_TABLE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::MenuItems => "menu_items",
            EntityKind::Tables => "tables",
            EntityKind::Orders => "orders",
        }
    }
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Per-entity, per-owner collection store backed by redb
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Database>,
}

impl KvStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        // Create all tables up front so reads never race table creation
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(MENU_ITEMS_TABLE)?;
            let _ = write_txn.open_table(TABLES_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read the raw JSON blob for `(kind, owner)`, if any
    pub fn read_blob(&self, kind: EntityKind, owner: &str) -> StoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(kind.table())?;
        Ok(table.get(owner)?.map(|guard| guard.value().to_vec()))
    }

    /// Replace the blob for `(kind, owner)` wholesale
    pub fn write_blob(&self, kind: EntityKind, owner: &str, blob: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(kind.table())?;
            table.insert(owner, blob)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Read an owner's collection; an absent key is an empty collection
    pub fn read_collection<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        owner: &str,
    ) -> StoreResult<Vec<T>> {
        match self.read_blob(kind, owner)? {
            Some(blob) => Ok(serde_json::from_slice(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and write an owner's full collection
    pub fn write_collection<T: Serialize>(
        &self,
        kind: EntityKind,
        owner: &str,
        items: &[T],
    ) -> StoreResult<()> {
        let blob = serde_json::to_vec(items)?;
        self.write_blob(kind, owner, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MenuItem;

    fn item(id: &str, name: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: "4.25".parse().unwrap(),
            category: "Drinks".to_string(),
        }
    }

    #[test]
    fn absent_key_reads_as_empty_collection() {
        let store = KvStore::open_in_memory().unwrap();
        let items: Vec<MenuItem> = store.read_collection(EntityKind::MenuItems, "r1").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn collection_round_trips() {
        let store = KvStore::open_in_memory().unwrap();
        let items = vec![item("1", "Latte"), item("2", "Mocha")];

        store
            .write_collection(EntityKind::MenuItems, "r1", &items)
            .unwrap();
        let back: Vec<MenuItem> = store.read_collection(EntityKind::MenuItems, "r1").unwrap();

        assert_eq!(back, items);
    }

    #[test]
    fn write_replaces_the_whole_blob() {
        let store = KvStore::open_in_memory().unwrap();
        store
            .write_collection(EntityKind::MenuItems, "r1", &[item("1", "Latte")])
            .unwrap();
        store
            .write_collection(EntityKind::MenuItems, "r1", &[item("2", "Mocha")])
            .unwrap();

        let back: Vec<MenuItem> = store.read_collection(EntityKind::MenuItems, "r1").unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].id, "2");
    }

    #[test]
    fn owners_are_isolated() {
        let store = KvStore::open_in_memory().unwrap();
        store
            .write_collection(EntityKind::MenuItems, "r1", &[item("1", "Latte")])
            .unwrap();

        let other: Vec<MenuItem> = store.read_collection(EntityKind::MenuItems, "r2").unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn kinds_are_isolated() {
        let store = KvStore::open_in_memory().unwrap();
        store
            .write_collection(EntityKind::MenuItems, "r1", &[item("1", "Latte")])
            .unwrap();

        let orders = store.read_blob(EntityKind::Orders, "r1").unwrap();
        assert!(orders.is_none());
    }
}
