use rust_decimal::Decimal;
use uuid::{Uuid, uuid};

use business::domain::shopping_item::model::ShoppingItem;

pub const ORANGE_JUICE_ID: Uuid = uuid!("ab2bd817-98cd-4cf3-a80a-53ea0cd9c200");
pub const DAIRY_MILK_ID: Uuid = uuid!("815accac-fd5b-478a-a9d6-f171a2f6ae7f");
pub const FROZEN_PIZZA_ID: Uuid = uuid!("33704c4a-5b87-464c-bfb6-51971b4d18ad");
pub const SWEET_CHEESE_ID: Uuid = uuid!("fd02d3b9-5e60-4d8a-8c30-1e4e7f54f3c5");

/// Seed contents for a fresh cart.
pub fn sample_items() -> Vec<ShoppingItem> {
    vec![
        item(ORANGE_JUICE_ID, "Orange Juice", "Orange Tree", 500),
        item(DAIRY_MILK_ID, "Dairy Milk", "Cow", 400),
        item(FROZEN_PIZZA_ID, "Frozen Pizza", "Uncle Mickey", 1200),
        item(SWEET_CHEESE_ID, "Sweet Cheese", "Cheese Factory", 750),
    ]
}

fn item(id: Uuid, name: &str, manufacturer: &str, cents: i64) -> ShoppingItem {
    ShoppingItem::from_repository(
        id,
        name.to_string(),
        Some(manufacturer.to_string()),
        Decimal::new(cents, 2),
    )
}
