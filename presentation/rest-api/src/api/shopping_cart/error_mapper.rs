use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_item::errors::ShoppingItemError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, response) = match &self {
            ShoppingItemError::ValidationFailed(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &message)
                    .with_details(violations.iter().map(FieldErrorResponse::from).collect()),
            ),
            ShoppingItemError::NotFound => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("NotFound", &message))
            }
            ShoppingItemError::AlreadyExists => {
                (StatusCode::CONFLICT, ErrorResponse::new("Conflict", &message))
            }
            ShoppingItemError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new("InternalError", &message))
            }
        };

        (status, Json(response))
    }
}
