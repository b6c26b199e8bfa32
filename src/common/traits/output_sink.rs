/// Output capability handed to every component at construction.
///
/// `print` carries regular progress messages (joins, evictions, downloaded
/// pieces), `print_err` carries faults. Production code uses
/// [`LogSink`](crate::common::structs::log_sink::LogSink); tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink: Send + Sync {
    fn print(&self, message: &str);

    fn print_err(&self, message: &str);
}
