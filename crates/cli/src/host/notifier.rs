use csharp_test_filter_core::{MessageLevel, Notifier};

/// Prints user messages to stderr unless quiet
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier {
    quiet: bool,
}

impl StderrNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for StderrNotifier {
    fn show_message(&self, level: MessageLevel, message: &str) {
        if self.quiet {
            return;
        }
        match level {
            MessageLevel::Info => eprintln!("info: {message}"),
            MessageLevel::Warning => eprintln!("warning: {message}"),
        }
    }
}
