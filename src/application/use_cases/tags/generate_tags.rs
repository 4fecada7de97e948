use serde_json::Value;

use crate::application::dto::tags::GeneratedTagsDto;
use crate::application::ports::completion_port::{CompletionError, CompletionPort};
use crate::application::services::seo_prompt::SEO_SYSTEM_PROMPT;
use crate::application::use_cases::tags::input_gate::accept_input;
use crate::domain::tags::TagSet;

#[derive(thiserror::Error, Debug)]
pub enum GenerateTagsError {
    #[error("invalid input")]
    InvalidInput,
    #[error("completion service is not configured")]
    ConfigurationMissing,
    #[error("completion service rate limited the request")]
    UpstreamRateLimited,
    #[error("completion service credits exhausted")]
    UpstreamQuotaExhausted,
    #[error("completion service failed")]
    UpstreamFailure(#[source] CompletionError),
}

impl From<CompletionError> for GenerateTagsError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::NotConfigured => GenerateTagsError::ConfigurationMissing,
            CompletionError::RateLimited => GenerateTagsError::UpstreamRateLimited,
            CompletionError::QuotaExhausted => GenerateTagsError::UpstreamQuotaExhausted,
            other => GenerateTagsError::UpstreamFailure(other),
        }
    }
}

pub struct GenerateTags<'a, C: CompletionPort + ?Sized> {
    pub completion: &'a C,
}

impl<'a, C: CompletionPort + ?Sized> GenerateTags<'a, C> {
    pub async fn execute(&self, payload: &Value) -> Result<GeneratedTagsDto, GenerateTagsError> {
        let input = accept_input(payload).ok_or(GenerateTagsError::InvalidInput)?;
        if !self.completion.is_configured() {
            tracing::error!("completion_credential_missing");
            return Err(GenerateTagsError::ConfigurationMissing);
        }

        let raw = self.completion.complete(SEO_SYSTEM_PROMPT, input).await?;
        let set = TagSet::from_raw(&raw);
        tracing::info!(
            count = set.len(),
            total_length = set.total_length(),
            "tags_generated"
        );
        Ok(set.into())
    }
}
