use poem_openapi::Object;
use serde_json::Value;
use uuid::Uuid;

use business::domain::shopping_item::model::{RawField, ShoppingItem, ShoppingItemCandidate};

/// New shopping cart item.
///
/// Fields are taken as raw JSON values so that a missing or mistyped field
/// comes back as a field-level validation error instead of a decoding
/// failure.
#[derive(Debug, Clone, Object)]
pub struct CreateShoppingItemRequest {
    /// Client-chosen UUID; generated when omitted
    pub id: Option<Value>,
    /// Item name (required string, cannot be empty)
    pub name: Option<Value>,
    /// Manufacturer or brand
    pub manufacturer: Option<Value>,
    /// Unit price as a decimal string such as "12.00", must not be negative (default: 0)
    pub price: Option<Value>,
}

fn raw_field(value: Option<Value>) -> Option<RawField> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(RawField::Text(text)),
        Value::Number(number) => Some(RawField::Number(number.to_string())),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => Some(RawField::Other),
    }
}

impl From<CreateShoppingItemRequest> for ShoppingItemCandidate {
    fn from(request: CreateShoppingItemRequest) -> Self {
        Self {
            id: raw_field(request.id),
            name: raw_field(request.name),
            manufacturer: raw_field(request.manufacturer),
            price: raw_field(request.price),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    /// Shopping item unique identifier
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Manufacturer or brand
    #[oai(skip_serializing_if_is_none)]
    pub manufacturer: Option<String>,
    /// Unit price as a decimal string, scale preserved (e.g. "5.00")
    pub price: String,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            manufacturer: item.manufacturer,
            price: item.price.to_string(),
        }
    }
}
