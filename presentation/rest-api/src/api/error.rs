use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shopping_item::errors::FieldViolation;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    /// Code-style identifier, e.g. `shopping_item.validation_failed`
    pub message: String,
    /// Field-level detail for validation failures
    #[oai(skip_serializing_if_is_empty)]
    pub details: Vec<FieldErrorResponse>,
}

#[derive(Object, Debug, Clone)]
pub struct FieldErrorResponse {
    pub field: String,
    pub code: String,
}

impl From<&FieldViolation> for FieldErrorResponse {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.to_string(),
            code: violation.code.to_string(),
        }
    }
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<FieldErrorResponse>) -> Self {
        self.details = details;
        self
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
