//! Dining Table Repository

use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::store::{EntityKind, KvStore};
use shared::models::{DiningTable, DiningTableCreate};

#[derive(Clone)]
pub struct DiningTableRepository {
    store: KvStore,
}

impl DiningTableRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// All tables for `owner`, in insertion order
    pub fn find_all(&self, owner: &str) -> RepoResult<Vec<DiningTable>> {
        Ok(self.store.read_collection(EntityKind::Tables, owner)?)
    }

    /// Find a table by id
    pub fn find_by_id(&self, owner: &str, id: &str) -> RepoResult<Option<DiningTable>> {
        Ok(self
            .find_all(owner)?
            .into_iter()
            .find(|table| table.id == id))
    }

    /// Register a new table.
    ///
    /// Duplicate numbers are not prevented - the generated id, not the
    /// number, is what the QR link addresses, so renumbering is safe.
    pub fn create(&self, owner: &str, data: DiningTableCreate) -> RepoResult<DiningTable> {
        if data.number == 0 {
            return Err(RepoError::Validation(
                "Table number must be positive".to_string(),
            ));
        }

        let table = DiningTable {
            id: Uuid::new_v4().to_string(),
            number: data.number,
        };

        let mut tables = self.find_all(owner)?;
        tables.push(table.clone());
        self.store
            .write_collection(EntityKind::Tables, owner, &tables)?;
        Ok(table)
    }

    /// Delete a table; returns whether anything was removed
    pub fn delete(&self, owner: &str, id: &str) -> RepoResult<bool> {
        let mut tables = self.find_all(owner)?;
        let before = tables.len();
        tables.retain(|table| table.id != id);
        if tables.len() == before {
            return Ok(false);
        }
        self.store
            .write_collection(EntityKind::Tables, owner, &tables)?;
        Ok(true)
    }
}
