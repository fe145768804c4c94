use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::service::ShoppingCartService;
use crate::domain::shopping_item::use_cases::get_all::GetAllShoppingItemsUseCase;

pub struct GetAllShoppingItemsUseCaseImpl {
    pub service: Arc<dyn ShoppingCartService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShoppingItemsUseCase for GetAllShoppingItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ShoppingItem>, ShoppingItemError> {
        self.logger.info("Getting all shopping items");
        let items = self.service.get_all_items().await.inspect_err(|err| {
            self.logger
                .error(&format!("Failed to list shopping items: {}", err));
        })?;
        self.logger
            .info(&format!("Retrieved {} shopping items", items.len()));
        Ok(items)
    }
}
