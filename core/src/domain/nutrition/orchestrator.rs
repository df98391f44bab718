use tracing::{error, warn};

use crate::domain::{common::entities::app_errors::CoreError, llm::ports::LLMClient};

/// One AI-backed feature: how to ask, how to read the answer, how to check
/// it against known data, and what to return when any of that fails.
pub trait AdvisoryTask {
    type Output: Send;

    const NAME: &'static str;
    const MAX_OUTPUT_TOKENS: u32;

    fn prompt(&self) -> String;

    fn parse(&self, raw: &str) -> Result<Self::Output, CoreError>;

    fn validate(&self, output: Self::Output) -> Result<Self::Output, CoreError> {
        Ok(output)
    }

    fn fallback(&self) -> Self::Output;
}

/// Runs a task against the completion client. Exactly one completion call is
/// made; any failure along the way resolves to the task's fallback.
pub async fn resolve<L, T>(client: &L, task: &T) -> T::Output
where
    L: LLMClient,
    T: AdvisoryTask + Sync,
{
    match attempt(client, task).await {
        Ok(output) => output,
        Err(e) if e.is_recoverable_by_fallback() => {
            warn!(feature = T::NAME, cause = %e, "Using fallback result");
            task.fallback()
        }
        Err(e) => {
            error!(feature = T::NAME, cause = %e, "Unexpected failure, using fallback result");
            task.fallback()
        }
    }
}

async fn attempt<L, T>(client: &L, task: &T) -> Result<T::Output, CoreError>
where
    L: LLMClient,
    T: AdvisoryTask + Sync,
{
    let raw = client.complete(task.prompt(), T::MAX_OUTPUT_TOKENS).await?;
    let parsed = task.parse(&raw)?;
    task.validate(parsed)
}
