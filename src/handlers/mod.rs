pub mod grades;
pub mod login;
pub mod status;
pub mod students;
pub mod subjects;
pub mod users;

use crate::error::ApiError;

/// Pull a required field out of a request body. Absent and blank both count
/// as missing and reply 400 before anything touches the store.
pub(crate) fn require(value: Option<&str>, field: &str) -> Result<String, ApiError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::bad_request(format!("{field} is required"))),
    }
}
