use std::env;

pub const DEFAULT_AI_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Clone)]
pub struct Config {
    pub api_port: u16,
    pub ai_gateway_url: String,
    pub ai_model: String,
    pub ai_api_key: Option<String>,
    pub ai_timeout_secs: u64,
    pub request_max_bytes: usize,
    pub is_production: bool,
}

// The API key never goes to the logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_port", &self.api_port)
            .field("ai_gateway_url", &self.ai_gateway_url)
            .field("ai_model", &self.ai_model)
            .field("ai_api_key", &self.ai_api_key.as_ref().map(|_| "<redacted>"))
            .field("ai_timeout_secs", &self.ai_timeout_secs)
            .field("request_max_bytes", &self.request_max_bytes)
            .field("is_production", &self.is_production)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            var(key).and_then(|v| {
                let trimmed = v.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
        };

        let api_port = var("API_PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8888);
        let ai_gateway_url =
            non_empty("AI_GATEWAY_URL").unwrap_or_else(|| DEFAULT_AI_GATEWAY_URL.into());
        let ai_model = non_empty("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.into());
        let ai_api_key = non_empty("AI_API_KEY").or_else(|| non_empty("LOVABLE_API_KEY"));
        let ai_timeout_secs = var("AI_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(60);
        let request_max_bytes = var("REQUEST_MAX_BYTES")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(64 * 1024);
        let is_production = matches!(
            var("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        if !(ai_gateway_url.starts_with("http://") || ai_gateway_url.starts_with("https://")) {
            anyhow::bail!("AI_GATEWAY_URL must be an http(s) URL");
        }

        // Production hardening: require https and a credential
        if is_production {
            if !ai_gateway_url.starts_with("https://") {
                anyhow::bail!("AI_GATEWAY_URL must use https in production");
            }
            if ai_api_key.is_none() {
                anyhow::bail!("AI_API_KEY must be set in production");
            }
        }

        Ok(Self {
            api_port,
            ai_gateway_url,
            ai_model,
            ai_api_key,
            ai_timeout_secs,
            request_max_bytes,
            is_production,
        })
    }
}
