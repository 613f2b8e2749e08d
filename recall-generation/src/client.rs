//! GenerationClient: deadline + bounded retry around a provider.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use recall_core::config::GenerationConfig;
use recall_core::errors::GenerationError;
use recall_core::traits::{GenerationProvider, Purpose};

/// Client every agent goes through for generative calls.
///
/// Each call attempt runs under `request_timeout_secs`; transient
/// failures (including timeouts) are retried up to
/// `max_transient_retries` times. Exhausted retries become a fatal
/// failure, which the caller converts into its stage's typed outcome.
pub struct GenerationClient<P> {
    provider: P,
    config: GenerationConfig,
}

impl<P: GenerationProvider> GenerationClient<P> {
    pub fn new(provider: P, config: GenerationConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate text, retrying transient failures.
    pub async fn complete(
        &self,
        prompt: &str,
        purpose: Purpose,
    ) -> Result<String, GenerationError> {
        self.call(purpose, || self.provider.complete(prompt, purpose))
            .await
    }

    /// Embed text, retrying transient failures.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, GenerationError> {
        self.call(Purpose::QueryEmbedding, || self.provider.embed(text))
            .await
    }

    async fn call<T, F, Fut>(&self, purpose: Purpose, mut attempt_fn: F) -> Result<T, GenerationError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GenerationError>>,
    {
        let attempts = self.config.max_transient_retries + 1;
        let deadline = Duration::from_secs(self.config.request_timeout_secs);
        let mut last = None;

        for attempt in 1..=attempts {
            let outcome = match tokio::time::timeout(deadline, attempt_fn()).await {
                Ok(result) => result,
                Err(_) => Err(GenerationError::Timeout {
                    secs: self.config.request_timeout_secs,
                }),
            };

            match outcome {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(%purpose, attempt, "generation call succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) if e.is_transient() => {
                    if attempt < attempts {
                        warn!(%purpose, attempt, error = %e, "transient generation failure, retrying");
                    }
                    last = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        let reason = last
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Err(GenerationError::fatal(format!(
            "retries exhausted after {attempts} attempts: {reason}"
        )))
    }
}
