//! homework-relay - polls the homework review API and forwards status changes
//! to a Telegram chat
//!
//! The library holds everything but process wiring: configuration, the port
//! traits with their HTTP adapters, and the poll loop.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod paths;

pub use adapters::{PracticumClient, TelegramNotifier};
pub use error::{ErrorKind, RelayError};
