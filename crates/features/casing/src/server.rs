//! REST handlers applying the configured policy to submitted values.

use crate::{Casing, FieldDescriptor, FieldKind};
use axum::Json;
use axum::extract::State;
use cadastro_derive::api_handler;
use cadastro_kernel::domain::constants::CASING_TAG;
use cadastro_kernel::server::{ApiError, ApiState};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NormalizeRequest {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NormalizeResponse {
    pub value: String,
    /// `true` when the field kept its case.
    pub preserved: bool,
}

/// A submitted form keyed by field name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct FormPayload(pub Map<String, Value>);

#[api_handler(
    post,
    path = "/casing/normalize",
    request_body = NormalizeRequest,
    responses((status = OK, description = "Normalized value", body = NormalizeResponse)),
    tag = CASING_TAG,
)]
pub async fn normalize_handler(
    State(state): State<ApiState>,
    Json(request): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, ApiError> {
    let casing = state.try_get_slice::<Casing>()?;

    let field =
        FieldDescriptor::named(&request.name).with_id(request.id.as_deref()).with_kind(request.kind);
    let preserved = casing.policy.classify(&field).is_preserved();
    let value = casing.policy.transform(&field, &request.value).into_owned();

    Ok(Json(NormalizeResponse { value, preserved }))
}

#[api_handler(
    post,
    path = "/casing/normalize-form",
    request_body = FormPayload,
    responses((status = OK, description = "Normalized form", body = FormPayload)),
    tag = CASING_TAG,
)]
pub async fn normalize_form_handler(
    State(state): State<ApiState>,
    Json(FormPayload(form)): Json<FormPayload>,
) -> Result<Json<FormPayload>, ApiError> {
    let casing = state.try_get_slice::<Casing>()?;
    let fields = form.len();
    let form = casing.policy.normalize_form(form);

    tracing::debug!(fields, "Form normalized");

    Ok(Json(FormPayload(form)))
}

/// Routes of the casing slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(normalize_handler))
        .routes(routes!(normalize_form_handler))
}
