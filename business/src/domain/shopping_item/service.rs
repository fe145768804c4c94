use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{NewShoppingItem, ShoppingItem};

/// Storage port owning the shopping cart contents.
///
/// Absence is a normal outcome here: lookups return `None` and removals
/// return `false` instead of failing. `Err` is reserved for the store
/// itself misbehaving, or for an insert whose id is already taken.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShoppingCartService: Send + Sync {
    async fn get_all_items(&self) -> Result<Vec<ShoppingItem>, RepositoryError>;
    async fn get_item_by_id(&self, id: Uuid) -> Result<Option<ShoppingItem>, RepositoryError>;
    /// Stores the item, assigning an id when the caller did not supply one.
    async fn add_item(&self, item: NewShoppingItem) -> Result<ShoppingItem, RepositoryError>;
    async fn remove_item(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
