//! Synthesizer tests with a scripted provider.

use recall_core::config::{GenerationConfig, SynthesisConfig};
use recall_core::errors::QueryError;
use recall_core::models::{
    AlignmentOutput, DocumentChunk, EventId, MergedContext, QueryPlan, SectionLabel,
    TemporalScope, TimelineChunk,
};
use recall_core::traits::Purpose;
use recall_generation::GenerationClient;
use recall_synthesis::{Synthesizer, INSUFFICIENT_CONTEXT_ANSWER};
use test_fixtures::{basis, date, ScriptedProvider, ScriptedReply};

fn timeline_chunk(day: &str, score: f64) -> TimelineChunk {
    TimelineChunk {
        event_id: EventId::new(),
        text: "standup notes".to_string(),
        date: date(day),
        relevance_score: score,
    }
}

fn document_chunk(score: f64) -> DocumentChunk {
    DocumentChunk {
        event_id: EventId::new(),
        text: "report text".to_string(),
        source_title: "Q4 Report".to_string(),
        relevance_score: score,
    }
}

fn alignment() -> AlignmentOutput {
    let mut context = MergedContext::default();
    context.push_section(
        SectionLabel::TimelineEvents,
        vec!["[2024-01-09] standup notes".to_string()],
    );
    AlignmentOutput {
        aligned_pairs: Vec::new(),
        summary: "Found timeline events from Jan 09.".to_string(),
        context,
    }
}

fn plan() -> QueryPlan {
    QueryPlan::degraded(TemporalScope::Unscoped)
}

fn client(provider: &ScriptedProvider) -> GenerationClient<&ScriptedProvider> {
    GenerationClient::new(provider, GenerationConfig::default())
}

const PASS: &str = r#"{"adequate": true, "feedback": ""}"#;
const FAIL: &str = r#"{"adequate": false, "feedback": "missing the totals"}"#;

#[tokio::test]
async fn empty_context_answers_without_any_generative_call() {
    let provider = ScriptedProvider::new(basis(0, 4));
    let client = client(&provider);
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());

    let answer = synthesizer
        .synthesize("what happened?", &plan(), vec![], vec![], &alignment())
        .await
        .unwrap();

    assert_eq!(answer.answer, INSUFFICIENT_CONTEXT_ANSWER);
    assert_eq!(answer.confidence.value(), 0.0);
    assert!(answer.dates_used.is_empty());
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn adequate_draft_is_accepted_after_one_check() {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push_text(Purpose::AnswerDraft, "Sales were up 20%.");
    provider.push_text(Purpose::SelfCheck, PASS);
    let client = client(&provider);
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());

    let answer = synthesizer
        .synthesize(
            "how were sales?",
            &plan(),
            vec![timeline_chunk("2024-01-09", 1.0)],
            vec![],
            &alignment(),
        )
        .await
        .unwrap();

    assert_eq!(answer.answer, "Sales were up 20%.");
    assert_eq!(provider.call_count(Purpose::AnswerDraft), 1);
    assert_eq!(provider.call_count(Purpose::SelfCheck), 1);
    // Floor 0.25 plus 0.75 times the perfect retrieval score.
    assert!((answer.confidence.value() - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn failed_check_triggers_exactly_one_regeneration() {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push_text(Purpose::AnswerDraft, "Sales happened.");
    provider.push_text(Purpose::AnswerDraft, "Sales totaled $2M, up 20%.");
    provider.push_text(Purpose::SelfCheck, FAIL);
    let client = client(&provider);
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());

    let answer = synthesizer
        .synthesize(
            "how were sales?",
            &plan(),
            vec![timeline_chunk("2024-01-09", 1.0)],
            vec![],
            &alignment(),
        )
        .await
        .unwrap();

    // The regenerated draft is accepted unconditionally.
    assert_eq!(answer.answer, "Sales totaled $2M, up 20%.");
    assert_eq!(provider.call_count(Purpose::AnswerDraft), 2);
    assert_eq!(provider.call_count(Purpose::SelfCheck), 1);
    // Perfect score discounted by the regeneration penalty.
    assert!((answer.confidence.value() - 0.8).abs() < 1e-9);
}

#[tokio::test]
async fn unparseable_check_counts_as_a_pass() {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push_text(Purpose::AnswerDraft, "draft");
    provider.push_text(Purpose::SelfCheck, "looks good to me!");
    let client = client(&provider);
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());

    let answer = synthesizer
        .synthesize(
            "question",
            &plan(),
            vec![timeline_chunk("2024-01-09", 0.5)],
            vec![],
            &alignment(),
        )
        .await
        .unwrap();

    assert_eq!(answer.answer, "draft");
    assert_eq!(provider.call_count(Purpose::AnswerDraft), 1);
}

#[tokio::test]
async fn failed_check_call_counts_as_a_pass() {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push_text(Purpose::AnswerDraft, "draft");
    provider.push(Purpose::SelfCheck, ScriptedReply::Fatal("model gone".into()));
    let client = client(&provider);
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());

    let answer = synthesizer
        .synthesize(
            "question",
            &plan(),
            vec![timeline_chunk("2024-01-09", 0.5)],
            vec![],
            &alignment(),
        )
        .await
        .unwrap();

    assert_eq!(answer.answer, "draft");
}

#[tokio::test]
async fn failed_draft_aborts_the_query() {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push(Purpose::AnswerDraft, ScriptedReply::Fatal("model gone".into()));
    let client = client(&provider);
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());

    let err = synthesizer
        .synthesize(
            "question",
            &plan(),
            vec![timeline_chunk("2024-01-09", 0.5)],
            vec![],
            &alignment(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QueryError::Generation {
            purpose: Purpose::AnswerDraft,
            ..
        }
    ));
}

#[tokio::test]
async fn dates_used_are_sorted_and_deduplicated() {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push_text(Purpose::AnswerDraft, "answer");
    provider.push_text(Purpose::SelfCheck, PASS);
    let client = client(&provider);
    let synthesizer = Synthesizer::new(&client, SynthesisConfig::default());

    let answer = synthesizer
        .synthesize(
            "question",
            &plan(),
            vec![
                timeline_chunk("2024-01-10", 0.9),
                timeline_chunk("2024-01-09", 0.8),
                timeline_chunk("2024-01-09", 0.7),
            ],
            vec![document_chunk(0.6)],
            &alignment(),
        )
        .await
        .unwrap();

    assert_eq!(
        answer.dates_used,
        vec![date("2024-01-09"), date("2024-01-10")]
    );
}

#[tokio::test]
async fn zero_max_regenerations_skips_the_self_check() {
    let provider = ScriptedProvider::new(basis(0, 4));
    provider.push_text(Purpose::AnswerDraft, "draft");
    let client = client(&provider);
    let config = SynthesisConfig {
        max_regenerations: 0,
        ..SynthesisConfig::default()
    };
    let synthesizer = Synthesizer::new(&client, config);

    let answer = synthesizer
        .synthesize(
            "question",
            &plan(),
            vec![timeline_chunk("2024-01-09", 0.5)],
            vec![],
            &alignment(),
        )
        .await
        .unwrap();

    assert_eq!(answer.answer, "draft");
    assert_eq!(provider.call_count(Purpose::SelfCheck), 0);
}
