pub mod application {
    pub mod shopping_item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
    }

    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shopping_item {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
}
