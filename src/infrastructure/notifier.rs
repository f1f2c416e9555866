use crate::domain::ports::Notifier;
use crate::domain::user::Email;
use crate::error::Result;
use tracing::info;

/// Notifier that records welcome emails as log events instead of delivering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LoggingNotifier {
    fn send_welcome_email(&self, address: &Email) -> Result<()> {
        info!(recipient = %address, "sending welcome email");
        Ok(())
    }
}
