//! A single homework entry from the status API

use serde_json::Value;

use super::HomeworkStatus;
use crate::error::RelayError;

/// Key holding the homework name in an API record
pub const NAME_KEY: &str = "homework_name";

/// Key holding the status code in an API record
pub const STATUS_KEY: &str = "status";

/// The two fields of an API record the relay cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    /// Homework name as shown to the student
    pub name: String,
    /// Current review status
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Extract a record from one element of the `homeworks` array
    ///
    /// The name is checked before the status, so a record lacking both
    /// reports the missing name.
    pub fn from_value(value: &Value) -> Result<Self, RelayError> {
        let Some(fields) = value.as_object() else {
            return Err(RelayError::TypeMismatch(format!(
                "homework record must be an object, got {}",
                json_type(value)
            )));
        };

        let name = match fields.get(NAME_KEY) {
            None => return Err(RelayError::MissingField(NAME_KEY)),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(RelayError::TypeMismatch(format!(
                    "`{NAME_KEY}` must be a string, got {}",
                    json_type(other)
                )));
            },
        };

        let status = match fields.get(STATUS_KEY) {
            None => return Err(RelayError::UnknownStatus("<absent>".to_string())),
            Some(Value::String(code)) => code.parse().map_err(RelayError::UnknownStatus)?,
            Some(other) => return Err(RelayError::UnknownStatus(other.to_string())),
        };

        Ok(Self { name, status })
    }
}

/// JSON type name for error messages
pub const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
