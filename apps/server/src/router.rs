use axum::Router;
use cadastro::kernel::prelude::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Cadastro API", description = "Document validation and case normalization"))]
struct ApiDoc;

/// Slice routes with request tracing, plus the Scalar UI at `/api`.
pub fn init(state: ApiState) -> Router {
    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(cadastro::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(routes).merge(Scalar::with_url("/api", api_doc))
}
