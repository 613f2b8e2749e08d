//! The Planner agent: question → structured retrieval plan.

use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use tracing::{debug, warn};

use recall_core::config::PlannerConfig;
use recall_core::models::{QueryPlan, TemporalScope, DEFAULT_SUBTASKS};
use recall_core::traits::{GenerationProvider, Purpose};
use recall_generation::{json, GenerationClient};

use crate::temporal;

/// Analyzes the question and extracts temporal scope, topics, entities,
/// and subtasks.
///
/// Never fails the query: if the extraction call exhausts its retries
/// or returns garbage, the plan degrades to whatever the deterministic
/// resolver found plus default subtasks.
pub struct Planner<'a, P> {
    client: &'a GenerationClient<P>,
    config: PlannerConfig,
}

impl<'a, P: GenerationProvider> Planner<'a, P> {
    pub fn new(client: &'a GenerationClient<P>, config: PlannerConfig) -> Self {
        Self { client, config }
    }

    /// Build the retrieval plan for a question, with `today` injected
    /// by the caller.
    pub async fn plan(&self, question: &str, today: NaiveDate) -> QueryPlan {
        // The deterministic resolver wins over the LLM's dates: for
        // relative expressions it is exact by construction.
        let resolved = temporal::resolve(question, today);

        let prompt = planning_prompt(question, today);
        let reply = match self.client.complete(&prompt, Purpose::Planning).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "planner extraction failed, degrading plan");
                let scope = self.refine_scope(resolved.unwrap_or(TemporalScope::Unscoped));
                return QueryPlan::degraded(scope);
            }
        };

        let Some(value) = json::extract_json(&reply) else {
            warn!("planner reply contained no JSON, degrading plan");
            let scope = self.refine_scope(resolved.unwrap_or(TemporalScope::Unscoped));
            return QueryPlan::degraded(scope);
        };
        let raw: RawPlan = serde_json::from_value(value).unwrap_or_default();

        let scope = resolved
            .or_else(|| raw.temporal_scope.and_then(RawScope::into_scope))
            .unwrap_or(TemporalScope::Unscoped);
        let scope = self.refine_scope(scope);

        debug!(?scope, topics = raw.topics.len(), entities = raw.entities.len(), "plan built");

        QueryPlan {
            temporal_scope: scope,
            topics: raw.topics,
            entities: raw.entities,
            subtasks: if raw.subtasks.trim().is_empty() {
                DEFAULT_SUBTASKS.to_string()
            } else {
                raw.subtasks
            },
            degraded: false,
        }
    }

    /// Narrow a range wider than `max_range_days` to the most recent
    /// `narrow_to_days` of it, keeping the end date.
    fn refine_scope(&self, scope: TemporalScope) -> TemporalScope {
        let TemporalScope::Range { start, end } = scope else {
            return scope;
        };
        if (end - start).num_days() <= self.config.max_range_days {
            return scope;
        }
        let narrowed_start = end - Duration::days(self.config.narrow_to_days);
        debug!(%start, %end, %narrowed_start, "narrowed over-broad temporal range");
        TemporalScope::Range {
            start: narrowed_start,
            end,
        }
    }
}

/// JSON shape the extraction prompt asks for.
#[derive(Debug, Default, Deserialize)]
struct RawPlan {
    #[serde(default)]
    temporal_scope: Option<RawScope>,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    entities: Vec<String>,
    #[serde(default)]
    subtasks: String,
}

#[derive(Debug, Deserialize)]
struct RawScope {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
}

impl RawScope {
    fn into_scope(self) -> Option<TemporalScope> {
        match self.kind.as_str() {
            "date" => {
                let date = self.date?.parse().ok()?;
                Some(TemporalScope::Date { date })
            }
            "range" => {
                let a: NaiveDate = self.start_date?.parse().ok()?;
                let b: NaiveDate = self.end_date?.parse().ok()?;
                Some(TemporalScope::Range {
                    start: a.min(b),
                    end: a.max(b),
                })
            }
            _ => None,
        }
    }
}

fn planning_prompt(question: &str, today: NaiveDate) -> String {
    format!(
        r#"Analyze the following question and extract structured information.
Today's date is {iso} ({pretty}).

Question: "{question}"

Extract the following:
1. Temporal scope: When is the user asking about?
   - If asking about a specific day (e.g., "yesterday", "last Tuesday", "June 15th"), return the specific date
   - If asking about a period (e.g., "last week", "this month"), return a date range
   - If no temporal reference, return null

2. Topics: Main themes or subjects (e.g., "machine learning", "project planning")

3. Entities: Specific names of people, organizations, projects, etc.

4. Subtasks: Brief description of what retrieval should focus on

Respond in JSON format:
{{
  "temporal_scope": {{
    "type": "date|range|none",
    "date": "YYYY-MM-DD",
    "start_date": "YYYY-MM-DD",
    "end_date": "YYYY-MM-DD"
  }},
  "topics": ["topic1", "topic2"],
  "entities": ["Entity 1", "Entity 2"],
  "subtasks": "Focus on X and find information about Y"
}}"#,
        iso = today.format("%Y-%m-%d"),
        pretty = today.format("%A, %B %d, %Y"),
    )
}
