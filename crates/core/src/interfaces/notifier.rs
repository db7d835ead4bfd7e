//! User notification interface

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// Fire-and-forget messages shown to the user
pub trait Notifier: Send + Sync {
    fn show_message(&self, level: MessageLevel, message: &str);
}

/// Notifier that only records messages in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_message(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Info => tracing::info!("{}", message),
            MessageLevel::Warning => tracing::warn!("{}", message),
        }
    }
}
