use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::dto::tags::GeneratedTagsDto;
use crate::application::use_cases::tags::generate_tags::{GenerateTags, GenerateTagsError};
use crate::bootstrap::app_context::AppContext;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/generate-tags", post(generate_tags))
        .with_state(ctx)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateTagsRequest {
    /// Video title or description.
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTagsResponse {
    pub tags: Vec<String>,
    /// Length of the tags joined with `", "`.
    pub total_length: usize,
}

impl From<GeneratedTagsDto> for GenerateTagsResponse {
    fn from(d: GeneratedTagsDto) -> Self {
        GenerateTagsResponse {
            tags: d.tags,
            total_length: d.total_length,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for GenerateTagsError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GenerateTagsError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input"),
            GenerateTagsError::ConfigurationMissing => {
                (StatusCode::INTERNAL_SERVER_ERROR, "AI service not configured")
            }
            GenerateTagsError::UpstreamRateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again later.",
            ),
            GenerateTagsError::UpstreamQuotaExhausted => (
                StatusCode::PAYMENT_REQUIRED,
                "AI service credits exhausted. Please contact support.",
            ),
            GenerateTagsError::UpstreamFailure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate tags")
            }
        };
        error_response(status, message)
    }
}

#[utoipa::path(post, path = "/api/generate-tags", tag = "Tags",
    request_body = GenerateTagsRequest,
    responses(
        (status = 200, body = GenerateTagsResponse),
        (status = 400, body = ErrorResponse, description = "Missing, non-string or blank input, or an oversized body"),
        (status = 402, body = ErrorResponse, description = "AI service credits exhausted"),
        (status = 429, body = ErrorResponse, description = "AI service rate limited"),
        (status = 500, body = ErrorResponse, description = "AI service unavailable or not configured"),
    ))]
pub async fn generate_tags(
    State(ctx): State<AppContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerateTagsResponse>, GenerateTagsError> {
    // Bodies over REQUEST_MAX_BYTES are invalid input too
    let body = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "generate_tags_body_rejected");
        GenerateTagsError::InvalidInput
    })?;
    // Content-Type is not enforced; anything that is not JSON is invalid input
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "generate_tags_body_not_json");
        GenerateTagsError::InvalidInput
    })?;

    let completion = ctx.completion();
    let uc = GenerateTags {
        completion: completion.as_ref(),
    };
    match uc.execute(&payload).await {
        Ok(out) => Ok(Json(out.into())),
        Err(err) => {
            match &err {
                GenerateTagsError::InvalidInput => {
                    tracing::debug!("generate_tags_invalid_input")
                }
                _ => tracing::error!(error = ?err, "generate_tags_failed"),
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::completion_port::CompletionError;

    #[test]
    fn response_uses_camel_case_total_length() {
        let body = GenerateTagsResponse {
            tags: vec!["a".into(), "b".into()],
            total_length: 4,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "tags": ["a", "b"], "totalLength": 4 }));
    }

    #[test]
    fn errors_map_to_statuses() {
        let cases = [
            (GenerateTagsError::InvalidInput, StatusCode::BAD_REQUEST),
            (
                GenerateTagsError::ConfigurationMissing,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                GenerateTagsError::UpstreamRateLimited,
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                GenerateTagsError::UpstreamQuotaExhausted,
                StatusCode::PAYMENT_REQUIRED,
            ),
            (
                GenerateTagsError::UpstreamFailure(CompletionError::Status { status: 500 }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
