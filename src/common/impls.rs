pub mod custom_error;
pub mod log_sink;
