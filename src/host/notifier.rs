/// Transient user-visible notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints notices to stdout and mirrors them into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(notice = message);
        println!("{}", message);
    }
}
