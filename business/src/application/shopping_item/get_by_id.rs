use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::service::ShoppingCartService;
use crate::domain::shopping_item::use_cases::get_by_id::{
    GetShoppingItemByIdParams, GetShoppingItemByIdUseCase,
};

pub struct GetShoppingItemByIdUseCaseImpl {
    pub service: Arc<dyn ShoppingCartService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingItemByIdUseCase for GetShoppingItemByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingItemByIdParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Fetching shopping item by id: {}", params.id));

        match self.service.get_item_by_id(params.id).await? {
            Some(item) => Ok(item),
            None => {
                self.logger
                    .debug(&format!("Shopping item {} not found", params.id));
                Err(ShoppingItemError::NotFound)
            }
        }
    }
}
