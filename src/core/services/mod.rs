//! Polling services
//!
//! - [`validator`] - Check the shape of a status API reply
//! - [`interpreter`] - Turn a homework record into a message
//! - [`poller`] - The fetch/notify loop and its dedup state
//!
//! The validator and interpreter are pure; the poller reaches the outside
//! world only through the port traits.

pub mod interpreter;
pub mod poller;
pub mod validator;

pub use interpreter::{describe, format_change};
pub use poller::{
    CycleOutcome, DEFAULT_RETRY_PERIOD, NO_HOMEWORK, NOTIFICATION_PREFIX, PollState, Poller,
    unix_now,
};
pub use validator::{HOMEWORKS_KEY, validate};
