use std::sync::Arc;

/// Alias to a scalar floating type.
pub type Float = f64;

/// A logger type which is called with various information regarding problem loading.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Creates a logger which discards all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
