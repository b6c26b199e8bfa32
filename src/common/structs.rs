/// Generic message error.
pub mod custom_error;

/// Output sink backed by the `log` facade.
pub mod log_sink;
