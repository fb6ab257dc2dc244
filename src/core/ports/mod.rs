//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the polling logic and the two
//! remote services it talks to. Implementations live in the `adapters` module;
//! tests provide in-memory ones.

mod notifier;
mod review_api;

pub use notifier::Notifier;
pub use review_api::ReviewApi;
