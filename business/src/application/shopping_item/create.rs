use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::{RawField, ShoppingItem, ShoppingItemCandidate};
use crate::domain::shopping_item::service::ShoppingCartService;
use crate::domain::shopping_item::use_cases::create::CreateShoppingItemUseCase;

pub struct CreateShoppingItemUseCaseImpl {
    pub service: Arc<dyn ShoppingCartService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShoppingItemUseCase for CreateShoppingItemUseCaseImpl {
    async fn execute(
        &self,
        candidate: ShoppingItemCandidate,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger.info(&format!(
            "Creating shopping item: {}",
            candidate
                .name
                .as_ref()
                .and_then(RawField::as_text)
                .unwrap_or("<unnamed>")
        ));

        let new_item = match candidate.validate() {
            Ok(new_item) => new_item,
            Err(ShoppingItemError::ValidationFailed(violations)) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
                self.logger.warn(&format!(
                    "Rejected shopping item, invalid fields: {}",
                    fields.join(", ")
                ));
                return Err(ShoppingItemError::ValidationFailed(violations));
            }
            Err(other) => return Err(other),
        };

        let item = self
            .service
            .add_item(new_item)
            .await
            .map_err(ShoppingItemError::from_insert)?;

        self.logger
            .info(&format!("Shopping item created: {}", item.id));
        Ok(item)
    }
}
