use super::{cors_config, server_config::ServerConfig, store_config::StoreConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            store: StoreConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
