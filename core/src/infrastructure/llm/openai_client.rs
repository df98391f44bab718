use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{
        entities::{CompletionRequest, CompletionResponse, TokenUsage},
        ports::CompletionTransport,
    },
};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Chat-completions transport for OpenAI and compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAICompletionTransport {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

impl From<CompletionRequest> for ChatRequest {
    fn from(request: CompletionRequest) -> Self {
        Self {
            model: request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        }
    }
}

impl TryFrom<ChatResponse> for CompletionResponse {
    type Error = CoreError;

    fn try_from(response: ChatResponse) -> Result<Self, Self::Error> {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::UpstreamError("No response from LLM".to_string()))?;

        let usage = response
            .usage
            .map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse { content, usage })
    }
}

impl OpenAICompletionTransport {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build completion HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl CompletionTransport for OpenAICompletionTransport {
    async fn send(&self, request: CompletionRequest) -> Result<CompletionResponse, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion API request failed: {}", e);
                CoreError::UpstreamError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Completion API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            CoreError::UpstreamError(format!("Failed to parse LLM response: {}", e))
        })?;

        CompletionResponse::try_from(chat_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_system_and_user_messages() {
        let request = ChatRequest::from(CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            system_instruction: "be brief".to_string(),
            prompt: "hello".to_string(),
            max_output_tokens: 400,
            temperature: 0.5,
        });

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ],
                "max_tokens": 400,
                "temperature": 0.5
            })
        );
    }

    #[test]
    fn response_yields_first_choice_and_usage() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "{\"ok\": 1}"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
        }))
        .unwrap();

        let completion = CompletionResponse::try_from(response).unwrap();
        assert_eq!(completion.content, "{\"ok\": 1}");
        assert_eq!(completion.usage.completion_tokens, 7);
    }

    #[test]
    fn response_without_choices_is_an_upstream_error() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();

        assert!(matches!(
            CompletionResponse::try_from(response),
            Err(CoreError::UpstreamError(_))
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let transport = OpenAICompletionTransport::new(
            "sk-test".to_string(),
            "https://api.openai.com/v1/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(transport.base_url, "https://api.openai.com/v1");
    }
}
