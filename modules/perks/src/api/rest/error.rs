use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Every error body is `{ "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

/// Axum response wrapper that renders an [`ErrorBody`] with the right status.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// Map domain error to an HTTP error
pub fn map_domain_error(e: &DomainError) -> ApiError {
    match e {
        e if e.is_validation() => ApiError::bad_request(e.to_string()),
        DomainError::PerkNotFound { .. } => ApiError::new(StatusCode::NOT_FOUND, e.to_string()),
        DomainError::DuplicatePerk | DomainError::DuplicateTitle => {
            ApiError::new(StatusCode::CONFLICT, e.to_string())
        }
        _ => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        map_domain_error(&e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Rejected perk id");
        ApiError::bad_request("invalid perk id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn maps_each_domain_error_to_status() {
        let cases = [
            (DomainError::TitleQueryRequired, StatusCode::BAD_REQUEST),
            (DomainError::TitleRequired, StatusCode::BAD_REQUEST),
            (DomainError::perk_not_found(Uuid::nil()), StatusCode::NOT_FOUND),
            (DomainError::DuplicatePerk, StatusCode::CONFLICT),
            (DomainError::DuplicateTitle, StatusCode::CONFLICT),
            (DomainError::database("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(map_domain_error(&err).status, status, "{err}");
        }
    }

    #[test]
    fn messages_are_fixed_per_condition() {
        assert_eq!(
            map_domain_error(&DomainError::perk_not_found(Uuid::nil())).message,
            "perk not found"
        );
        assert_eq!(
            map_domain_error(&DomainError::DuplicatePerk).message,
            "duplicate perk for this merchant"
        );
        assert_eq!(
            map_domain_error(&DomainError::DuplicateTitle).message,
            "duplicate title already exists"
        );
        assert_eq!(
            map_domain_error(&DomainError::TitleQueryRequired).message,
            "title query parameter is required"
        );
        assert_eq!(
            map_domain_error(&DomainError::database("secret dsn")).message,
            "internal server error"
        );
    }

    #[test]
    fn response_carries_status() {
        let resp = ApiError::new(StatusCode::CONFLICT, "dup").into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
