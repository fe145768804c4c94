use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case messages to the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shopping_cart", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shopping_cart", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shopping_cart", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shopping_cart", "{}", message);
    }
}
