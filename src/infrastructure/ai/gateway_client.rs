use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::completion_port::{CompletionError, CompletionPort};
use crate::bootstrap::config::Config;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

/// OpenAI-compatible `/v1/chat/completions` client.
pub struct GatewayCompletionClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GatewayCompletionClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build http client: {e}"))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
        })
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        Self::new(
            cfg.ai_gateway_url.clone(),
            cfg.ai_model.clone(),
            cfg.ai_api_key.clone(),
            Duration::from_secs(cfg.ai_timeout_secs),
        )
    }
}

/// Pulls `choices[0].message.content`, treating anything missing as empty.
fn extract_content(body: &Value) -> String {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl CompletionPort for GatewayCompletionClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, CompletionError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(CompletionError::NotConfigured);
        };
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_text,
                },
            ],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(anyhow::anyhow!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %detail, "ai_gateway_error");
            return Err(match status.as_u16() {
                429 => CompletionError::RateLimited,
                402 => CompletionError::QuotaExhausted,
                status => CompletionError::Status { status },
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CompletionError::Transport(anyhow::anyhow!("failed to read body: {e}")))?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(json) => Ok(extract_content(&json)),
            Err(e) => {
                tracing::warn!(error = %e, "ai_gateway_unparsable_body");
                Ok(String::new())
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
