//! Status interpreter
//!
//! Turns one homework record into the sentence sent to the student.

use serde_json::Value;

use crate::core::models::HomeworkRecord;
use crate::error::RelayError;

/// Describe the review status of `record`
///
/// Fails with [`RelayError::MissingField`] when the name is absent and with
/// [`RelayError::UnknownStatus`] when the status is absent or unrecognized.
pub fn describe(record: &Value) -> Result<String, RelayError> {
    let record = HomeworkRecord::from_value(record).inspect_err(|e| {
        log::error!("Can not interpret homework record: {e}");
    })?;
    Ok(format_change(&record))
}

/// Sentence announcing the current status of a record
#[must_use]
pub fn format_change(record: &HomeworkRecord) -> String {
    format!(
        "Changed review status of \"{}\". {}",
        record.name,
        record.status.verdict()
    )
}
