//! homework-relay - polls the homework review API and forwards status changes
//! to a Telegram chat

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

mod cli;

/// Main entry point for the homework-relay binary
fn main() {
    if let Err(e) = cli::run() {
        log::error!("CRITICAL: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
