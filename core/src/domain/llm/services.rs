use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{
        budget::{ModelRates, estimate_tokens, fit_prompt},
        entities::{CompletionRequest, UsageStats},
        ports::{CompletionTransport, LLMClient},
        usage::UsageTracker,
    },
};

pub const SYSTEM_INSTRUCTION: &str =
    "You are a nutrition expert AI assistant. Provide concise, helpful responses.";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Completion client with prompt truncation and usage accounting.
///
/// Built without a transport when no API key is configured; every call then
/// fails with [`CoreError::ServiceUnavailable`] so callers fall back.
#[derive(Clone)]
pub struct CompletionService<T: CompletionTransport> {
    transport: Option<T>,
    model: String,
    rates: ModelRates,
    temperature: f32,
    usage: Arc<UsageTracker>,
}

impl<T: CompletionTransport> CompletionService<T> {
    pub fn new(transport: T, model: String, usage: Arc<UsageTracker>) -> Self {
        Self {
            transport: Some(transport),
            rates: ModelRates::for_model(&model),
            model,
            temperature: DEFAULT_TEMPERATURE,
            usage,
        }
    }

    pub fn disabled(model: String, usage: Arc<UsageTracker>) -> Self {
        warn!("No completion API key configured, AI features will use fallbacks");
        Self {
            transport: None,
            rates: ModelRates::for_model(&model),
            model,
            temperature: DEFAULT_TEMPERATURE,
            usage,
        }
    }
}

impl<T: CompletionTransport> LLMClient for CompletionService<T> {
    async fn complete(&self, prompt: String, max_output_tokens: u32) -> Result<String, CoreError> {
        let transport = self.transport.as_ref().ok_or_else(|| {
            CoreError::ServiceUnavailable("no API key provided".to_string())
        })?;

        let prompt = fit_prompt(prompt, max_output_tokens);
        let prompt_tokens = estimate_tokens(&prompt);

        let request = CompletionRequest {
            model: self.model.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt,
            max_output_tokens,
            temperature: self.temperature,
        };

        let response = transport.send(request).await.map_err(|e| {
            error!("Completion request failed: {}", e);
            e
        })?;

        let completion_tokens = response.usage.completion_tokens;
        let cost = self.rates.cost(prompt_tokens, completion_tokens);
        let totals = self.usage.record(
            u64::from(prompt_tokens) + u64::from(completion_tokens),
            cost,
        );

        info!(
            prompt_tokens,
            completion_tokens,
            cost,
            total_cost = totals.total_cost,
            "Completion request succeeded"
        );

        Ok(response.content)
    }

    fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    fn usage_stats(&self) -> UsageStats {
        let totals = self.usage.snapshot();
        let average_cost_per_request = if totals.request_count > 0 {
            totals.total_cost / totals.request_count as f64
        } else {
            0.0
        };

        UsageStats {
            ai_enabled: self.is_enabled(),
            model: if self.is_enabled() {
                self.model.clone()
            } else {
                "none".to_string()
            },
            total_tokens: totals.total_tokens,
            total_cost: totals.total_cost,
            request_count: totals.request_count,
            average_cost_per_request,
        }
    }
}
