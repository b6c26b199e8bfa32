/// Console/log output capability.
pub mod output_sink;
