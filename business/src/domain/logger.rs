/// Logging port used by the use cases; adapters decide where messages go.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
