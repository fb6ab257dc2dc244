//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that do network I/O:
//!
//! - `practicum` - Homework status API client ([`ReviewApi`](crate::core::ports::ReviewApi))
//! - `telegram` - Telegram Bot API sender ([`Notifier`](crate::core::ports::Notifier))

pub mod practicum;
pub mod telegram;

pub use practicum::PracticumClient;
pub use telegram::TelegramNotifier;
