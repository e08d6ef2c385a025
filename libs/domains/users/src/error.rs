use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use std::time::Duration;
use thiserror::Error;

const SERVER_ERROR: &str = "Server error";

#[derive(Debug, Error)]
pub enum UserError {
    /// Input failed validation or could not be hashed; the detail is only logged
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("User with that email already exists")]
    AlreadyExists,

    #[error("User with that id does not exist")]
    NotFound,

    #[error("Server error: {0}")]
    ServerError(String),

    /// An update touched a number of rows other than exactly one
    #[error("Update affected {0} rows, expected exactly 1")]
    UnexpectedRowsAffected(u64),

    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::BadRequest(detail) => {
                tracing::debug!(%detail, "Rejected user input");
                AppError::BadRequest("Bad request".to_string())
            }
            UserError::AlreadyExists => AppError::Forbidden(err.to_string()),
            UserError::NotFound => AppError::NotFound(err.to_string()),
            UserError::ServerError(_)
            | UserError::UnexpectedRowsAffected(_)
            | UserError::DeadlineExceeded(_)
            | UserError::Database(_) => {
                tracing::error!(error = %err, "User operation failed");
                AppError::InternalServerError(SERVER_ERROR.to_string())
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn mapped(err: UserError) -> (StatusCode, String) {
        let app: AppError = err.into();
        let status = app.status();
        let message = match app {
            AppError::BadRequest(m)
            | AppError::Forbidden(m)
            | AppError::NotFound(m)
            | AppError::InternalServerError(m) => m,
        };
        (status, message)
    }

    #[test]
    fn test_client_errors_keep_their_messages() {
        assert_eq!(
            mapped(UserError::BadRequest("name: must not be blank".into())),
            (StatusCode::BAD_REQUEST, "Bad request".to_string())
        );
        assert_eq!(
            mapped(UserError::AlreadyExists),
            (
                StatusCode::FORBIDDEN,
                "User with that email already exists".to_string()
            )
        );
        assert_eq!(
            mapped(UserError::NotFound),
            (
                StatusCode::NOT_FOUND,
                "User with that id does not exist".to_string()
            )
        );
    }

    #[test]
    fn test_server_errors_hide_details() {
        for err in [
            UserError::ServerError("join error".into()),
            UserError::UnexpectedRowsAffected(0),
            UserError::DeadlineExceeded(Duration::from_secs(1)),
            UserError::Database(DbErr::Custom("connection reset".into())),
        ] {
            assert_eq!(
                mapped(err),
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            );
        }
    }
}
