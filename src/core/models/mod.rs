//! Domain models for homework-relay
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`HomeworkStatus`] - Review status codes and the fixed verdict table
//! - [`HomeworkRecord`] - The name/status pair read from one API record

mod homework;
mod status;

pub(crate) use homework::json_type;
pub use homework::{HomeworkRecord, NAME_KEY, STATUS_KEY};
pub use status::HomeworkStatus;
