use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::logger::{Logger, MockLogger};
use crate::domain::shopping_item::model::ShoppingItem;

pub(crate) fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLogger::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub(crate) fn stored_item(name: &str) -> ShoppingItem {
    ShoppingItem::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        None,
        Decimal::new(250, 2),
    )
}
