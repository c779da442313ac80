// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-facing messages.
///
/// Every handler returns `Result<_, ApiError>`; this type is the single
/// mapping layer from error kind to status code and JSON body, so no handler
/// carries its own catch-all.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - a required field is missing from the request body
    BadRequest(String),

    // 401 Unauthorized - unknown cedula or wrong password
    Unauthorized(String),

    // 500 Internal Server Error - store unreachable, constraint violation,
    // or any other fault below the handler
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to JSON response body. Client errors reply with `msg`,
    /// server faults reply with `error` carrying the underlying fault text,
    /// matching the wire format the frontend already consumes.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Internal(msg) => json!({ "error": msg }),
            _ => json!({ "msg": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

// Convert lower-level faults to ApiError
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {}", err);
        ApiError::Internal(err.to_string())
    }
}

impl From<crate::auth::PasswordError> for ApiError {
    fn from(err: crate::auth::PasswordError) -> Self {
        tracing::error!("password hashing error: {}", err);
        ApiError::Internal(err.to_string())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_reply_with_msg() {
        let body = ApiError::unauthorized("user not found").to_json();
        assert_eq!(body["msg"], "user not found");
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_server_faults_surface_error_text() {
        let body = ApiError::internal("connection refused").to_json();
        assert_eq!(body["error"], "connection refused");
        assert!(body.get("msg").is_none());
    }
}
