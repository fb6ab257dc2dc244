//! Notification port
//!
//! Defines the interface for delivering a message to the configured channel.

use crate::error::RelayError;

/// Outbound message sink bound to a single destination channel
pub trait Notifier {
    /// Deliver `text`, making at most one attempt
    fn notify(&self, text: &str) -> Result<(), RelayError>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, text: &str) -> Result<(), RelayError> {
        (**self).notify(text)
    }
}
