use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_item::model::{NewShoppingItem, ShoppingItem};
use business::domain::shopping_item::service::ShoppingCartService;

use super::fixture;

/// Process-local cart contents.
///
/// Reads share the lock; inserts and removals hold it exclusively, so the
/// id uniqueness check and the insert happen as one step.
#[derive(Debug, Default)]
pub struct InMemoryShoppingCartService {
    items: RwLock<HashMap<Uuid, ShoppingItem>>,
}

impl InMemoryShoppingCartService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given items. A later item replaces an earlier one with the same id.
    pub fn with_items(items: impl IntoIterator<Item = ShoppingItem>) -> Self {
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn with_sample_items() -> Self {
        Self::with_items(fixture::sample_items())
    }
}

#[async_trait]
impl ShoppingCartService for InMemoryShoppingCartService {
    async fn get_all_items(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get_item_by_id(&self, id: Uuid) -> Result<Option<ShoppingItem>, RepositoryError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn add_item(&self, item: NewShoppingItem) -> Result<ShoppingItem, RepositoryError> {
        let item = item.into_item();
        match self.items.write().await.entry(item.id) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicated),
            Entry::Vacant(slot) => Ok(slot.insert(item).clone()),
        }
    }

    async fn remove_item(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}
