//! Menu Item Repository

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::store::{EntityKind, KvStore};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

#[derive(Clone)]
pub struct MenuItemRepository {
    store: KvStore,
}

impl MenuItemRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// All menu items for `owner`, in insertion order
    pub fn find_all(&self, owner: &str) -> RepoResult<Vec<MenuItem>> {
        Ok(self.store.read_collection(EntityKind::MenuItems, owner)?)
    }

    /// Create a new menu item
    pub fn create(&self, owner: &str, data: MenuItemCreate) -> RepoResult<MenuItem> {
        validate_name(&data.name)?;
        validate_category(&data.category)?;
        validate_price(data.price)?;

        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            price: data.price,
            category: data.category,
        };

        let mut items = self.find_all(owner)?;
        items.push(item.clone());
        self.store
            .write_collection(EntityKind::MenuItems, owner, &items)?;
        Ok(item)
    }

    /// Update a menu item in place
    pub fn update(&self, owner: &str, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        if let Some(name) = &data.name {
            validate_name(name)?;
        }
        if let Some(category) = &data.category {
            validate_category(category)?;
        }
        if let Some(price) = data.price {
            validate_price(price)?;
        }

        let mut items = self.find_all(owner)?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        if let Some(name) = data.name {
            item.name = name;
        }
        if let Some(price) = data.price {
            item.price = price;
        }
        if let Some(category) = data.category {
            item.category = category;
        }
        let updated = item.clone();

        self.store
            .write_collection(EntityKind::MenuItems, owner, &items)?;
        Ok(updated)
    }

    /// Delete a menu item; returns whether anything was removed
    pub fn delete(&self, owner: &str, id: &str) -> RepoResult<bool> {
        let mut items = self.find_all(owner)?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.store
            .write_collection(EntityKind::MenuItems, owner, &items)?;
        Ok(true)
    }
}

fn validate_name(name: &str) -> RepoResult<()> {
    if name.trim().is_empty() {
        return Err(RepoError::Validation("Item name is required".to_string()));
    }
    Ok(())
}

fn validate_category(category: &str) -> RepoResult<()> {
    if category.trim().is_empty() {
        return Err(RepoError::Validation("Category is required".to_string()));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> RepoResult<()> {
    if price <= Decimal::ZERO {
        return Err(RepoError::Validation(
            "Price must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
