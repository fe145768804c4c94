use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::errors::{FieldViolation, ShoppingItemError};

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub manufacturer: Option<String>,
    pub price: Decimal,
}

impl ShoppingItem {
    /// Constructor for data already held by a store (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        manufacturer: Option<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name,
            manufacturer,
            price,
        }
    }
}

/// A validated item that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingItem {
    pub id: Option<Uuid>,
    pub name: String,
    pub manufacturer: Option<String>,
    pub price: Decimal,
}

impl NewShoppingItem {
    /// Keeps the caller-supplied id, or assigns a fresh one.
    pub fn into_item(self) -> ShoppingItem {
        ShoppingItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            manufacturer: self.manufacturer,
            price: self.price,
        }
    }
}

/// A payload field as the client sent it, before any type checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    Text(String),
    /// Numeric literal, kept as written.
    Number(String),
    /// Booleans, arrays and objects.
    Other,
}

impl RawField {
    pub fn text(value: impl Into<String>) -> Self {
        RawField::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawField::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Untrusted creation payload, as received from a client.
#[derive(Debug, Clone, Default)]
pub struct ShoppingItemCandidate {
    pub id: Option<RawField>,
    pub name: Option<RawField>,
    pub manufacturer: Option<RawField>,
    pub price: Option<RawField>,
}

impl ShoppingItemCandidate {
    /// Checks every field and reports all violations at once, in field order.
    pub fn validate(self) -> Result<NewShoppingItem, ShoppingItemError> {
        let id = parse_id(self.id);
        let name = parse_name(self.name);
        let manufacturer = parse_manufacturer(self.manufacturer);
        let price = parse_price(self.price);

        match (id, name, manufacturer, price) {
            (Ok(id), Ok(name), Ok(manufacturer), Ok(price)) => Ok(NewShoppingItem {
                id,
                name,
                manufacturer,
                price,
            }),
            (id, name, manufacturer, price) => {
                let violations = [id.err(), name.err(), manufacturer.err(), price.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(ShoppingItemError::ValidationFailed(violations))
            }
        }
    }
}

fn parse_id(field: Option<RawField>) -> Result<Option<Uuid>, FieldViolation> {
    match field {
        None => Ok(None),
        Some(RawField::Text(raw)) => Uuid::parse_str(raw.trim())
            .map(Some)
            .map_err(|_| FieldViolation::new("id", "shopping_item.id_invalid")),
        Some(_) => Err(FieldViolation::new("id", "shopping_item.id_invalid")),
    }
}

fn parse_name(field: Option<RawField>) -> Result<String, FieldViolation> {
    match field {
        None => Err(FieldViolation::new("name", "shopping_item.name_required")),
        Some(RawField::Text(name)) if name.trim().is_empty() => {
            Err(FieldViolation::new("name", "shopping_item.name_empty"))
        }
        Some(RawField::Text(name)) => Ok(name),
        Some(_) => Err(FieldViolation::new("name", "shopping_item.name_invalid")),
    }
}

fn parse_manufacturer(field: Option<RawField>) -> Result<Option<String>, FieldViolation> {
    match field {
        None => Ok(None),
        Some(RawField::Text(manufacturer)) if manufacturer.trim().is_empty() => Ok(None),
        Some(RawField::Text(manufacturer)) => Ok(Some(manufacturer)),
        Some(_) => Err(FieldViolation::new(
            "manufacturer",
            "shopping_item.manufacturer_invalid",
        )),
    }
}

fn parse_price(field: Option<RawField>) -> Result<Decimal, FieldViolation> {
    let price = match field {
        None => return Ok(Decimal::ZERO),
        Some(RawField::Text(raw) | RawField::Number(raw)) => Decimal::from_str(raw.trim())
            .map_err(|_| FieldViolation::new("price", "shopping_item.price_invalid"))?,
        Some(RawField::Other) => {
            return Err(FieldViolation::new("price", "shopping_item.price_invalid"));
        }
    };

    if price < Decimal::ZERO {
        return Err(FieldViolation::new("price", "shopping_item.price_negative"));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn guinness() -> ShoppingItemCandidate {
        ShoppingItemCandidate {
            id: None,
            name: Some(RawField::text("Guinness Original 6 Pack")),
            manufacturer: Some(RawField::text("Guinness")),
            price: Some(RawField::text("12.00")),
        }
    }

    fn violations_of(candidate: ShoppingItemCandidate) -> Vec<FieldViolation> {
        match candidate.validate() {
            Err(ShoppingItemError::ValidationFailed(violations)) => violations,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn should_accept_candidate_when_all_fields_valid() {
        let result = guinness().validate();

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Guinness Original 6 Pack");
        assert_eq!(item.manufacturer.as_deref(), Some("Guinness"));
        assert_eq!(item.price, Decimal::new(1200, 2));
        assert!(item.id.is_none());
    }

    #[test]
    fn should_keep_price_scale_as_written() {
        let item = guinness().validate().unwrap();

        assert_eq!(item.price.to_string(), "12.00");
    }

    #[test]
    fn should_accept_numeric_price() {
        let candidate = ShoppingItemCandidate {
            price: Some(RawField::Number("7.5".to_string())),
            ..guinness()
        };

        assert_eq!(candidate.validate().unwrap().price, Decimal::new(75, 1));
    }

    #[test]
    fn should_reject_when_name_missing() {
        let candidate = ShoppingItemCandidate {
            name: None,
            ..guinness()
        };

        assert_eq!(
            violations_of(candidate),
            vec![FieldViolation::new("name", "shopping_item.name_required")]
        );
    }

    #[test]
    fn should_reject_when_name_empty() {
        let candidate = ShoppingItemCandidate {
            name: Some(RawField::text("")),
            ..guinness()
        };

        assert_eq!(
            violations_of(candidate),
            vec![FieldViolation::new("name", "shopping_item.name_empty")]
        );
    }

    #[test]
    fn should_reject_when_name_not_text() {
        let candidate = ShoppingItemCandidate {
            name: Some(RawField::Number("5".to_string())),
            ..guinness()
        };

        assert_eq!(
            violations_of(candidate),
            vec![FieldViolation::new("name", "shopping_item.name_invalid")]
        );
    }

    #[test]
    fn should_reject_when_price_negative() {
        let candidate = ShoppingItemCandidate {
            price: Some(RawField::text("-0.01")),
            ..guinness()
        };

        assert_eq!(
            violations_of(candidate),
            vec![FieldViolation::new("price", "shopping_item.price_negative")]
        );
    }

    #[test]
    fn should_reject_when_price_not_decimal() {
        for price in [RawField::text("abc"), RawField::Other] {
            let candidate = ShoppingItemCandidate {
                price: Some(price),
                ..guinness()
            };

            assert_eq!(
                violations_of(candidate),
                vec![FieldViolation::new("price", "shopping_item.price_invalid")]
            );
        }
    }

    #[test]
    fn should_reject_when_id_not_uuid() {
        for id in [RawField::text("not-a-uuid"), RawField::Number("42".to_string())] {
            let candidate = ShoppingItemCandidate {
                id: Some(id),
                ..guinness()
            };

            assert_eq!(
                violations_of(candidate),
                vec![FieldViolation::new("id", "shopping_item.id_invalid")]
            );
        }
    }

    #[test]
    fn should_reject_when_manufacturer_not_text() {
        let candidate = ShoppingItemCandidate {
            manufacturer: Some(RawField::Other),
            ..guinness()
        };

        assert_eq!(
            violations_of(candidate),
            vec![FieldViolation::new(
                "manufacturer",
                "shopping_item.manufacturer_invalid"
            )]
        );
    }

    #[test]
    fn should_report_every_failing_field() {
        let candidate = ShoppingItemCandidate {
            id: Some(RawField::text("nope")),
            name: None,
            manufacturer: None,
            price: Some(RawField::text("-1")),
        };

        let fields: Vec<_> = violations_of(candidate).iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["id", "name", "price"]);
    }

    #[test]
    fn should_default_price_to_zero_when_missing() {
        let candidate = ShoppingItemCandidate {
            price: None,
            ..guinness()
        };

        assert_eq!(candidate.validate().unwrap().price, Decimal::ZERO);
    }

    #[test]
    fn should_drop_blank_manufacturer() {
        let candidate = ShoppingItemCandidate {
            manufacturer: Some(RawField::text("  ")),
            ..guinness()
        };

        assert!(candidate.validate().unwrap().manufacturer.is_none());
    }

    #[test]
    fn should_keep_supplied_id_when_stored() {
        let id = Uuid::new_v4();
        let candidate = ShoppingItemCandidate {
            id: Some(RawField::text(id.to_string())),
            ..guinness()
        };

        let item = candidate.validate().unwrap().into_item();

        assert_eq!(item.id, id);
    }

    #[test]
    fn should_assign_distinct_ids_when_missing() {
        let first = guinness().validate().unwrap().into_item();
        let second = guinness().validate().unwrap().into_item();

        assert_ne!(first.id, second.id);
    }

    proptest! {
        #[test]
        fn should_reject_any_whitespace_only_name(name in "[ \t\r\n]{0,16}") {
            let candidate = ShoppingItemCandidate {
                name: Some(RawField::Text(name)),
                ..guinness()
            };

            prop_assert!(matches!(
                candidate.validate(),
                Err(ShoppingItemError::ValidationFailed(_))
            ));
        }

        #[test]
        fn should_accept_any_non_negative_price(cents in 0i64..10_000_000) {
            let price = Decimal::new(cents, 2);
            let candidate = ShoppingItemCandidate {
                price: Some(RawField::Text(price.to_string())),
                ..guinness()
            };

            prop_assert_eq!(candidate.validate().unwrap().price, price);
        }
    }
}
