use std::env;

/// Settings for the in-memory shopping cart store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub seed_sample_items: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_items: true,
        }
    }
}

impl StoreConfig {
    /// Environment variables:
    /// - SEED_SAMPLE_ITEMS: start the cart with the sample items
    ///   (default: true; accepts true/false, 1/0, yes/no)
    pub fn from_env() -> Self {
        Self::from_value(env::var("SEED_SAMPLE_ITEMS").ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };

        match parse_flag(raw) {
            Some(seed_sample_items) => Self { seed_sample_items },
            None => {
                tracing::warn!("SEED_SAMPLE_ITEMS={} is not a boolean, seeding anyway", raw);
                Self::default()
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
