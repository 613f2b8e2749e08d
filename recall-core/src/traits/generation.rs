use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// What a generative call is for. Tags every call for logging and for
/// failure reporting at the stage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// Planner extraction of temporal scope, topics, and entities.
    Planning,
    /// Embedding of the question for similarity search.
    QueryEmbedding,
    /// Synthesizer draft generation.
    AnswerDraft,
    /// Synthesizer self-check pass.
    SelfCheck,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Purpose::Planning => "planning",
            Purpose::QueryEmbedding => "query embedding",
            Purpose::AnswerDraft => "answer draft",
            Purpose::SelfCheck => "self-check",
        };
        f.write_str(s)
    }
}

/// The generation collaborator (LLM + embedding provider), abstracted
/// behind one capability interface regardless of concrete provider.
///
/// Calls are potentially slow, external, and fallible; callers go
/// through `recall-generation`'s client, which adds the per-call
/// deadline and bounded transient retry.
pub trait GenerationProvider: Send + Sync {
    /// Generate text for a prompt.
    fn complete(
        &self,
        prompt: &str,
        purpose: Purpose,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;

    /// Embed a text into a dense vector.
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, GenerationError>> + Send;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

/// Shared references forward, so a caller can hand a client a borrow
/// and keep the provider for inspection.
impl<P: GenerationProvider> GenerationProvider for &P {
    fn complete(
        &self,
        prompt: &str,
        purpose: Purpose,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send {
        (**self).complete(prompt, purpose)
    }

    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, GenerationError>> + Send {
        (**self).embed(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
