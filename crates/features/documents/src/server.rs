//! REST handlers for API-side validation.

use crate::{ClientDraft, DocumentError, DocumentKind, Documents, validate_client};
use axum::Json;
use axum::extract::State;
use cadastro_derive::api_handler;
use cadastro_kernel::domain::constants::DOCUMENTS_TAG;
use cadastro_kernel::server::{ApiError, ApiState};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateDocumentRequest {
    /// Detected from the value shape when omitted.
    #[serde(default)]
    pub kind: Option<DocumentKind>,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateDocumentResponse {
    pub kind: DocumentKind,
    pub valid: bool,
    /// Display mask, present when the value is valid and the kind has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientValidationResponse {
    pub valid: bool,
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Validation { message, context } => Self::Unprocessable { message, context },
            DocumentError::Internal { message, context } => Self::Internal { message, context },
        }
    }
}

#[api_handler(
    post,
    path = "/documents/validate",
    request_body = ValidateDocumentRequest,
    responses(
        (status = OK, description = "Validation outcome", body = ValidateDocumentResponse),
        (status = BAD_REQUEST, description = "Kind missing and not detectable"),
    ),
    tag = DOCUMENTS_TAG,
)]
pub async fn validate_document_handler(
    State(state): State<ApiState>,
    Json(request): Json<ValidateDocumentRequest>,
) -> Result<Json<ValidateDocumentResponse>, ApiError> {
    let documents = state.try_get_slice::<Documents>()?;

    let kind = request.kind.or_else(|| DocumentKind::detect(&request.value)).ok_or_else(|| {
        ApiError::BadRequest {
            message: "document kind could not be detected".into(),
            context: Some("documents".into()),
        }
    })?;

    let valid = documents.check(kind, &request.value);
    let formatted = valid.then(|| kind.format(&request.value)).flatten();

    tracing::debug!(%kind, valid, "Document validated");

    Ok(Json(ValidateDocumentResponse { kind, valid, formatted }))
}

#[api_handler(
    post,
    path = "/clients/validate",
    request_body = ClientDraft,
    responses(
        (status = OK, description = "Client is valid", body = ClientValidationResponse),
        (status = UNPROCESSABLE_ENTITY, description = "A required field is missing"),
    ),
    tag = DOCUMENTS_TAG,
)]
pub async fn validate_client_handler(
    Json(client): Json<ClientDraft>,
) -> Result<Json<ClientValidationResponse>, ApiError> {
    validate_client(&client)?;
    Ok(Json(ClientValidationResponse { valid: true }))
}

/// Routes of the documents slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(validate_document_handler))
        .routes(routes!(validate_client_handler))
}
