use async_trait::async_trait;

use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::{ShoppingItem, ShoppingItemCandidate};

#[async_trait]
pub trait CreateShoppingItemUseCase: Send + Sync {
    /// Validates the candidate and stores it; invalid input never reaches the store.
    async fn execute(
        &self,
        candidate: ShoppingItemCandidate,
    ) -> Result<ShoppingItem, ShoppingItemError>;
}
