use log::{error, info};
use crate::common::structs::log_sink::LogSink;
use crate::common::traits::output_sink::OutputSink;

impl LogSink {
    pub fn new(target: &'static str) -> LogSink {
        LogSink { target }
    }
}

impl OutputSink for LogSink {
    fn print(&self, message: &str) {
        info!(target: self.target, "{message}");
    }

    fn print_err(&self, message: &str) {
        error!(target: self.target, "{message}");
    }
}
