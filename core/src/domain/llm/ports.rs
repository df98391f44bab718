use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::entities::{CompletionRequest, CompletionResponse, UsageStats},
};

/// Wire-level call to a hosted chat-completion provider.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionTransport: Send + Sync {
    fn send(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, CoreError>> + Send;
}

/// Text completion as seen by the rest of the domain.
///
/// `complete` fails with [`CoreError::ServiceUnavailable`] when no credential
/// is configured and with [`CoreError::UpstreamError`] when the remote call
/// fails. Neither is retried.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        prompt: String,
        max_output_tokens: u32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn is_enabled(&self) -> bool;

    fn usage_stats(&self) -> UsageStats;
}
