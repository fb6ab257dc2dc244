//! Response validator
//!
//! Checks the top-level shape of a status API reply. Individual records are
//! left to the interpreter.

use serde_json::Value;

use crate::core::models::json_type;
use crate::error::RelayError;

/// Key holding the list of homework records
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Return the `homeworks` array of a reply, most recent record first
pub fn validate(raw: &Value) -> Result<&[Value], RelayError> {
    log::debug!("Checking response data");

    let Some(fields) = raw.as_object() else {
        return Err(RelayError::TypeMismatch(format!(
            "response must be an object, got {}",
            json_type(raw)
        )));
    };

    match fields.get(HOMEWORKS_KEY) {
        None => Err(RelayError::MissingField(HOMEWORKS_KEY)),
        Some(Value::Array(homeworks)) => Ok(homeworks),
        Some(other) => Err(RelayError::TypeMismatch(format!(
            "`{HOMEWORKS_KEY}` must be an array, got {}",
            json_type(other)
        ))),
    }
}
