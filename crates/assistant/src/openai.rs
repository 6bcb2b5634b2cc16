//! Chat-completion client for OpenAI-compatible APIs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pasieka_analytics::Snapshot;

use crate::Assistant;
use crate::error::AssistantError;
use crate::prompt::{ChatMessage, FALLBACK_ANSWER, build_messages};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Content of the first choice, or [`FALLBACK_ANSWER`] when there is none.
pub fn extract_answer(body: &str) -> Result<String, AssistantError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| AssistantError::Transport(e.to_string()))?;
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| FALLBACK_ANSWER.to_string()))
}

/// Provider message from an error body, with a generic fallback.
pub fn extract_error(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| "Błąd odpowiedzi z OpenAI".to_string())
}

/// Assistant backed by the `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiAssistant {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiAssistant {
    /// `api_key: None` builds an assistant that refuses every question.
    pub fn new(api_key: Option<String>, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Assistant for OpenAiAssistant {
    async fn ask(&self, question: &str, snapshot: &Snapshot) -> Result<String, AssistantError> {
        let Some(api_key) = &self.api_key else {
            return Err(AssistantError::NotConfigured);
        };
        if question.trim().is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }

        let messages = build_messages(question, snapshot)
            .map_err(|e| AssistantError::Transport(e.to_string()))?;
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = extract_error(&body);
            tracing::warn!(status = status.as_u16(), error = %message, "chat completion failed");
            return Err(AssistantError::Upstream(message));
        }

        extract_answer(&body)
    }
}
