/// Writes component output through the `log` facade under a fixed target,
/// so fern decides where it ends up (console, file, or both).
#[derive(Debug, Clone)]
pub struct LogSink {
    pub(crate) target: &'static str,
}
