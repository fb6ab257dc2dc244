//! Homework review API port
//!
//! Defines the interface for fetching homework statuses.

use serde_json::Value;

use crate::error::RelayError;

/// Source of homework status updates
///
/// Implementations perform exactly one request per call and return the
/// decoded body without checking its shape.
pub trait ReviewApi {
    /// Fetch statuses changed since `from_date` (Unix seconds)
    fn fetch_statuses(&self, from_date: i64) -> Result<Value, RelayError>;
}

impl<T: ReviewApi + ?Sized> ReviewApi for &T {
    fn fetch_statuses(&self, from_date: i64) -> Result<Value, RelayError> {
        (**self).fetch_statuses(from_date)
    }
}
