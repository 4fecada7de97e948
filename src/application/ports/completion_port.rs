use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
pub enum CompletionError {
    #[error("completion service credential is not configured")]
    NotConfigured,
    #[error("completion service rate limit exceeded")]
    RateLimited,
    #[error("completion service credits exhausted")]
    QuotaExhausted,
    #[error("completion service returned status {status}")]
    Status { status: u16 },
    #[error("completion service request failed")]
    Transport(#[source] anyhow::Error),
}

/// Hosted chat-completion model. One call per invocation, no retries.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Returns the generated text, or an empty string when the service
    /// answered without any message content.
    async fn complete(&self, system_prompt: &str, user_text: &str)
    -> Result<String, CompletionError>;

    fn is_configured(&self) -> bool;
}
