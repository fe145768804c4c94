use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

pub struct GetShoppingItemByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetShoppingItemByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingItemByIdParams,
    ) -> Result<ShoppingItem, ShoppingItemError>;
}
