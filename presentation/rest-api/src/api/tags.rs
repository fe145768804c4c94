use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service liveness
    Health,
    /// Shopping cart items
    ShoppingCart,
}
