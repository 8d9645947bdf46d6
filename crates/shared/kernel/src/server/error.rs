use super::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::error;

/// Errors returned by slice handlers, rendered as `{"error": "..."}`.
#[cadastro_derive::cadastro_error]
pub enum ApiError {
    /// The request body is structurally wrong.
    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The request is well-formed but fails a business rule.
    #[error("Unprocessable{}: {message}", format_context(.context))]
    Unprocessable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("State error{}: {source}", format_context(.context))]
    State { source: ApiStateError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::State { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller; server faults are not detailed.
    fn public_message(&self) -> Cow<'static, str> {
        match self {
            Self::BadRequest { message, .. } | Self::Unprocessable { message, .. } => message.clone(),
            Self::State { .. } | Self::Internal { .. } => Cow::Borrowed("internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(serde_json::json!({ "error": self.public_message() }))).into_response()
    }
}
