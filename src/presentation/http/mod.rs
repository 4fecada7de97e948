pub mod health;
pub mod tags;

use std::any::Any;

use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use axum::http::StatusCode;
use axum::response::Response;
use http::{HeaderName, Method, header};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;

#[derive(OpenApi)]
#[openapi(
    paths(tags::generate_tags, health::health),
    components(schemas(
        tags::GenerateTagsRequest,
        tags::GenerateTagsResponse,
        tags::ErrorResponse,
        health::HealthResp,
    )),
    tags(
        (name = "Tags", description = "SEO tag generation"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;

/// Any origin. Every `OPTIONS` request is answered here with an empty 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "request_handler_panicked");
    tags::error_response(StatusCode::INTERNAL_SERVER_ERROR, tags::INTERNAL_ERROR_MESSAGE)
}

/// Full HTTP surface: API routes under `/api`, Swagger UI, CORS, tracing.
pub fn router(ctx: AppContext) -> Router {
    let body_limit = ctx.cfg.request_max_bytes;

    Router::new()
        .nest("/api", health::routes(ctx.clone()))
        .nest("/api", tags::routes(ctx))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
