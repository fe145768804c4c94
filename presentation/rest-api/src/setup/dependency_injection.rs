use std::sync::Arc;

use logger::TracingLogger;
use persistence::shopping_item::in_memory::InMemoryShoppingCartService;

use business::application::shopping_item::create::CreateShoppingItemUseCaseImpl;
use business::application::shopping_item::delete::DeleteShoppingItemUseCaseImpl;
use business::application::shopping_item::get_all::GetAllShoppingItemsUseCaseImpl;
use business::application::shopping_item::get_by_id::GetShoppingItemByIdUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::shopping_item::service::ShoppingCartService;

use crate::api::health::routes::HealthApi;
use crate::api::shopping_cart::routes::ShoppingCartApi;
use crate::config::store_config::StoreConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub shopping_cart_api: ShoppingCartApi,
}

impl DependencyContainer {
    /// Builds a fresh in-memory cart, seeded according to `store`.
    pub fn new(store: &StoreConfig) -> Self {
        let service = if store.seed_sample_items {
            InMemoryShoppingCartService::with_sample_items()
        } else {
            InMemoryShoppingCartService::new()
        };

        Self::with_service(Arc::new(service))
    }

    /// Wires every use case over the given cart store.
    pub fn with_service(service: Arc<dyn ShoppingCartService>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let get_all_use_case = Arc::new(GetAllShoppingItemsUseCaseImpl {
            service: service.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetShoppingItemByIdUseCaseImpl {
            service: service.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateShoppingItemUseCaseImpl {
            service: service.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteShoppingItemUseCaseImpl { service, logger });

        let shopping_cart_api = ShoppingCartApi::new(
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            delete_use_case,
        );

        Self {
            health_api: HealthApi,
            shopping_cart_api,
        }
    }
}
