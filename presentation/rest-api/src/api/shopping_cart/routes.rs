use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shopping_item::use_cases::create::CreateShoppingItemUseCase;
use business::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::get_all::GetAllShoppingItemsUseCase;
use business::domain::shopping_item::use_cases::get_by_id::{
    GetShoppingItemByIdParams, GetShoppingItemByIdUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_cart::dto::{CreateShoppingItemRequest, ShoppingItemResponse};
use crate::api::tags::ApiTags;

pub struct ShoppingCartApi {
    get_all_use_case: Arc<dyn GetAllShoppingItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetShoppingItemByIdUseCase>,
    create_use_case: Arc<dyn CreateShoppingItemUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
}

impl ShoppingCartApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllShoppingItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetShoppingItemByIdUseCase>,
        create_use_case: Arc<dyn CreateShoppingItemUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            delete_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "shopping_item.invalid_id"))
}

/// Shopping cart API
///
/// Endpoints for listing, reading, adding and removing cart items.
#[OpenApi]
impl ShoppingCartApi {
    /// List all items
    ///
    /// Returns every item in the cart. Order is not significant.
    #[oai(path = "/items", method = "get", tag = "ApiTags::ShoppingCart")]
    async fn get_all(&self) -> GetAllShoppingItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<ShoppingItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                GetAllShoppingItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllShoppingItemsResponse::InternalError(json)
            }
        }
    }

    /// Get an item by ID
    ///
    /// Returns 404 with an empty body when the cart holds no such item.
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::ShoppingCart")]
    async fn get_by_id(&self, id: Path<String>) -> GetShoppingItemByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetShoppingItemByIdResponse::BadRequest(invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetShoppingItemByIdParams { id: uuid })
            .await
        {
            Ok(item) => GetShoppingItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShoppingItemByIdResponse::NotFound,
                    _ => GetShoppingItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item
    ///
    /// Validates the payload before storing it. On success the response
    /// carries the stored item, including its assigned id, and a
    /// `Location` header pointing at it.
    #[oai(path = "/items", method = "post", tag = "ApiTags::ShoppingCart")]
    async fn create(&self, body: Json<CreateShoppingItemRequest>) -> CreateShoppingItemResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(item) => {
                let location = format!("/items/{}", item.id);
                CreateShoppingItemResponse::Created(Json(item.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateShoppingItemResponse::BadRequest(json),
                    409 => CreateShoppingItemResponse::Conflict(json),
                    _ => CreateShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item
    ///
    /// Returns 200 with an empty body, or 404 when the item does not exist.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::ShoppingCart")]
    async fn delete(&self, id: Path<String>) -> DeleteShoppingItemResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteShoppingItemResponse::BadRequest(invalid_id());
        };

        match self
            .delete_use_case
            .execute(DeleteShoppingItemParams { id: uuid })
            .await
        {
            Ok(()) => DeleteShoppingItemResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteShoppingItemResponse::NotFound,
                    _ => DeleteShoppingItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllShoppingItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShoppingItemResponse {
    #[oai(status = 201)]
    Created(
        Json<ShoppingItemResponse>,
        #[oai(header = "Location")] String,
    ),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteShoppingItemResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
