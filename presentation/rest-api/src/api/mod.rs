pub mod error;
pub mod health;
pub mod shopping_cart;
pub mod tags;
