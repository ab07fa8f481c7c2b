//! Mistral Assistant - AssistantService over Mistral's chat-completions API.
//!
//! The API is OpenAI-compatible: a bearer-authenticated POST to
//! `{base_url}/chat/completions` with role-tagged messages.
//!
//! # Configuration
//!
//! ```ignore
//! let config = MistralConfig::default()
//!     .with_model("mistral-small-latest")
//!     .with_temperature(0.6);
//!
//! let connector = MistralConnector::new(config)?;
//! let assistant = connector.connect(&api_key, "Yannick")?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::conversation::{Message, Role};
use crate::ports::{AssistantConnector, AssistantError, AssistantService};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "mistral-small-latest";

/// Builds the concierge persona for a user.
pub fn persona_prompt(user_name: &str) -> String {
    format!(
        "Vous êtes ELVIA, l'IA majordome de la Maison Louis Vuitton. \
         Vous vous adressez à l'utilisateur par son nom : {}. \
         Votre ton est noble et expert. \
         Vous accompagnez le client dans la pérennité de sa collection.",
        user_name
    )
}

/// Configuration shared by every assistant the connector creates.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.6,
            timeout: Duration::from_secs(60),
        }
    }
}

impl MistralConfig {
    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Creates `MistralAssistant`s that share one HTTP client.
pub struct MistralConnector {
    config: MistralConfig,
    client: Client,
}

impl MistralConnector {
    /// Creates a connector with the given configuration.
    pub fn new(config: MistralConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistantError::InvalidRequest(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &MistralConfig {
        &self.config
    }
}

impl AssistantConnector for MistralConnector {
    fn connect(
        &self,
        credential: &Secret<String>,
        user_name: &str,
    ) -> Result<Box<dyn AssistantService>, AssistantError> {
        if credential.expose_secret().trim().is_empty() {
            return Err(AssistantError::InvalidRequest(
                "API key is empty".to_string(),
            ));
        }

        Ok(Box::new(MistralAssistant {
            config: self.config.clone(),
            client: self.client.clone(),
            api_key: Secret::new(credential.expose_secret().clone()),
            system_prompt: persona_prompt(user_name),
        }))
    }
}

/// One assistant bound to an API key and a user.
pub struct MistralAssistant {
    config: MistralConfig,
    client: Client,
    api_key: Secret<String>,
    system_prompt: String,
}

impl MistralAssistant {
    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts the history and prompt to the wire format.
    fn to_chat_request(&self, prompt: &str, history: &[Message]) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);

        messages.push(ChatMessage {
            role: "system".to_string(),
            content: self.system_prompt.clone(),
        });

        for msg in history {
            messages.push(ChatMessage {
                role: match msg.role() {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content().to_string(),
            });
        }

        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
        }
    }

    async fn send_request(&self, request: &ChatRequest) -> Result<Response, AssistantError> {
        self.client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssistantError::timeout(self.config.timeout.as_secs() as u32)
                } else if e.is_connect() {
                    AssistantError::network(format!("Connection failed: {}", e))
                } else {
                    AssistantError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to errors.
    async fn handle_response_status(response: Response) -> Result<Response, AssistantError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AssistantError::AuthenticationFailed),
            429 => Err(AssistantError::rate_limited(30)),
            400 | 422 => Err(AssistantError::InvalidRequest(error_body)),
            500..=599 => Err(AssistantError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AssistantError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    fn extract_reply(response: ChatResponse) -> Result<String, AssistantError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AssistantError::parse("No choices in response"))?;

        let content = choice.message.content.unwrap_or_default();
        if content.trim().is_empty() {
            return Err(AssistantError::EmptyReply);
        }
        Ok(content)
    }
}

#[async_trait]
impl AssistantService for MistralAssistant {
    async fn ask(&self, prompt: &str, history: &[Message]) -> Result<String, AssistantError> {
        let request = self.to_chat_request(prompt, history);
        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::parse(format!("Failed to parse response: {}", e)))?;

        Self::extract_reply(body)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}
