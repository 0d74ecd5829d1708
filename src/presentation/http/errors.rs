//! HTTP error handling and response conversion.
//!
//! Handler errors are mapped to an HTTP status plus the JSON body shape the
//! order form consumes: `{"success": false, "error": "<message>"}`. Client
//! faults keep their message; server faults are reduced to a generic message
//! and logged with full context instead.

use crate::domain::order::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
///
/// Each variant maps to a specific HTTP status code. No error is retried;
/// all are terminal for the request that raised them.
#[derive(Debug)]
pub enum AppError {
    /// Request could not be parsed or violates an intake constraint (400).
    BadRequest(String),

    /// An attachment exceeds the per-file byte limit (413).
    PayloadTooLarge(String),

    /// Attachment or document write failed (500).
    Storage(String),

    /// Summary document rendering failed (500).
    Rendering(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
            Self::Rendering(msg) => write!(f, "Rendering error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Storage(_) | Self::Rendering(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::PayloadTooLarge(msg) => msg.clone(),
            Self::Storage(_) => "File operation failed".into(),
            Self::Rendering(_) => "Failed to generate PDF".into(),
            Self::Internal(_) => "Server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::TooManyAttachments { .. } => AppError::BadRequest(err.to_string()),
            DomainError::AttachmentTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
        }
    }
}

// === General Fallback Error Conversion ===

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "Unclassified error with chain");
        err.chain().for_each(|cause| {
            tracing::error!(cause = %cause, "Error source");
        });
        AppError::Internal("Operation failed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::entity::{MAX_ATTACHMENTS, MAX_ATTACHMENT_BYTES};

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::BadRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge("test".into()).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::Storage("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Rendering("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: AppError = DomainError::TooManyAttachments {
            limit: MAX_ATTACHMENTS,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AppError = DomainError::AttachmentTooLarge {
            name: "big.zip".into(),
            limit: MAX_ATTACHMENT_BYTES,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_server_faults_hide_details() {
        let err = AppError::Rendering("lopdf exploded".into());
        assert_eq!(err.user_message(), "Failed to generate PDF");
        let err = AppError::Internal("secret".into());
        assert_eq!(err.user_message(), "Server error");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::BadRequest("missing boundary".into());
        assert_eq!(err.to_string(), "Bad request: missing boundary");
    }
}
