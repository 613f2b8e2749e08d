//! Prompt templates for drafting, checking, and regenerating answers.

use recall_core::models::{AlignmentOutput, QueryPlan};

/// Prompt for the initial draft.
pub fn answer_prompt(question: &str, plan: &QueryPlan, alignment: &AlignmentOutput) -> String {
    format!(
        "You are a helpful assistant with access to a user's personal memory store.\n\
         \n\
         User's Question: {question}\n\
         \n\
         Retrieval Plan:\n\
         {subtasks}\n\
         \n\
         Retrieved Context:\n\
         {context}\n\
         \n\
         Alignment Summary:\n\
         {summary}\n\
         \n\
         Based on the above context, provide a clear, concise, and accurate answer \
         to the user's question.\n\
         If the context doesn't contain enough information to fully answer the \
         question, acknowledge this.\n\
         Cite specific dates or sources when relevant.",
        question = question,
        subtasks = plan.subtasks,
        context = alignment.context.render(),
        summary = alignment.summary,
    )
}

/// Prompt asking the model to judge its own draft. The reply must be
/// JSON: `{"adequate": bool, "feedback": string}`.
pub fn check_prompt(question: &str, plan: &QueryPlan, answer: &str) -> String {
    format!(
        "Evaluate if the following answer adequately addresses the question.\n\
         \n\
         Question: {question}\n\
         Planned subtasks: {subtasks}\n\
         \n\
         Answer: {answer}\n\
         \n\
         Does this answer:\n\
         1. Directly address the question?\n\
         2. Cover the key subtasks identified?\n\
         3. Acknowledge gaps if information is missing?\n\
         \n\
         Respond in JSON format:\n\
         {{\n\
         \x20 \"adequate\": true/false,\n\
         \x20 \"feedback\": \"brief feedback on what's missing or could be improved\"\n\
         }}",
        question = question,
        subtasks = plan.subtasks,
        answer = answer,
    )
}

/// Prompt for a regeneration attempt after a failed self-check.
pub fn regenerate_prompt(
    question: &str,
    draft: &str,
    feedback: &str,
    alignment: &AlignmentOutput,
) -> String {
    format!(
        "You previously generated this answer:\n\
         \n\
         {draft}\n\
         \n\
         However, it had these issues:\n\
         {feedback}\n\
         \n\
         Using the same context, generate an improved answer that addresses these \
         concerns.\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Question: {question}\n\
         \n\
         Improved Answer:",
        draft = draft,
        feedback = feedback,
        context = alignment.context.render(),
        question = question,
    )
}
