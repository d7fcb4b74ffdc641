//! Assembly of completion prompt messages.

use crate::{FunctionMatcher, MatchStats, SpecType, Specification};
use poly_core::ChatMessage;
use poly_error::PolyResult;
use tracing::debug;

/// Preface for the function section of the library message.
pub const FUNCTION_PREFACE: &str = "Here are some functions in the Poly API library,";

/// Preface for the event-handler section of the library message.
pub const WEBHOOK_PREFACE: &str = "Here are some event handlers in the Poly API library,";

/// Prefix steering the model toward library answers.
pub const LIBRARY_QUESTION_PREFIX: &str = "From the Poly API Library, ";

/// Builds the assistant message listing the matched library entries.
///
/// Functions render as a comment line with the description followed by
/// the callable path; webhook handles render as their bare path under
/// a separate preface. Returns `None` when nothing matched.
pub fn library_message(specifications: &[Specification]) -> Option<ChatMessage> {
    let mut function_parts = Vec::new();
    let mut webhook_parts = Vec::new();

    for spec in specifications {
        if *spec.spec_type() == SpecType::WebhookHandle {
            webhook_parts.push(spec.path());
        } else {
            function_parts.push(format!("// {}\n{}", spec.description(), spec.path_with_args()));
        }
    }

    let mut parts = Vec::new();
    if !function_parts.is_empty() {
        parts.push(FUNCTION_PREFACE.to_string());
        parts.extend(function_parts);
    }
    if !webhook_parts.is_empty() {
        parts.push(WEBHOOK_PREFACE.to_string());
        parts.extend(webhook_parts);
    }

    if parts.is_empty() {
        None
    } else {
        Some(ChatMessage::assistant(parts.join("\n\n")))
    }
}

/// Builds the user question message.
///
/// With matches in play the question asks for a library answer; with
/// none it goes to the model untouched.
pub fn question_message(question: &str, match_count: usize) -> ChatMessage {
    if match_count > 0 {
        ChatMessage::user(format!("{}{}", LIBRARY_QUESTION_PREFIX, question))
    } else {
        ChatMessage::user(question)
    }
}

/// Assembles the full prompt for a question.
///
/// Order: optional system prompt first, then the library message when
/// anything matched, then the question.
pub async fn build_prompt_messages<M: FunctionMatcher + ?Sized>(
    matcher: &M,
    system_prompt: Option<&str>,
    question: &str,
) -> PolyResult<(Vec<ChatMessage>, MatchStats)> {
    let (matches, mut stats) = matcher.top_matches(question).await?;
    stats.prompt = Some(question.to_string());
    debug!(
        match_count = stats.match_count,
        total = stats.total,
        "Matched specifications"
    );

    let mut messages = Vec::new();
    if let Some(library) = library_message(&matches) {
        messages.push(library);
    }
    messages.push(question_message(question, stats.match_count));

    if let Some(system) = system_prompt {
        messages.insert(0, ChatMessage::system(system));
    }

    Ok((messages, stats))
}
