use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::service::ShoppingCartService;
use crate::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};

pub struct DeleteShoppingItemUseCaseImpl {
    pub service: Arc<dyn ShoppingCartService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingItemUseCase for DeleteShoppingItemUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingItemParams) -> Result<(), ShoppingItemError> {
        self.logger
            .info(&format!("Deleting shopping item: {}", params.id));

        if !self.service.remove_item(params.id).await? {
            self.logger.warn(&format!(
                "Shopping item {} not found, nothing deleted",
                params.id
            ));
            return Err(ShoppingItemError::NotFound);
        }

        self.logger
            .info(&format!("Shopping item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::mock_logger;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shopping_item::service::MockShoppingCartService;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_existing_shopping_item() {
        let item_id = Uuid::new_v4();
        let mut mock_service = MockShoppingCartService::new();
        mock_service
            .expect_remove_item()
            .withf(move |id| *id == item_id)
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteShoppingItemUseCaseImpl {
            service: Arc::new(mock_service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingItemParams { id: item_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_service = MockShoppingCartService::new();
        mock_service.expect_remove_item().returning(|_| Ok(false));

        let use_case = DeleteShoppingItemUseCaseImpl {
            service: Arc::new(mock_service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingItemParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ShoppingItemError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_store_failure_as_repository_error() {
        let mut mock_service = MockShoppingCartService::new();
        mock_service
            .expect_remove_item()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = DeleteShoppingItemUseCaseImpl {
            service: Arc::new(mock_service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingItemParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingItemError::Repository(_)
        ));
    }
}
