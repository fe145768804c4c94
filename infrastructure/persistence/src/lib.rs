pub mod shopping_item {
    pub mod fixture;
    pub mod in_memory;
}
