use async_trait::async_trait;
use poly_completion::{
    CompletionAnswerer, ConversationStore, FunctionMatcher, MatchStats, Specification,
    LIBRARY_QUESTION_PREFIX, TOKEN_LIMIT_NOTICE,
};
use poly_core::{ChatMessage, CompletionRequest, Dispatcher, Role};
use poly_error::{
    CompletionError, CompletionErrorKind, CompletionResult, PolyError, PolyResult,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

/// Pops scripted replies in order and records every request seen.
struct ScriptedDispatcher {
    replies: Mutex<Vec<CompletionResult<ChatMessage>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedDispatcher {
    fn new(mut replies: Vec<CompletionResult<ChatMessage>>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for &ScriptedDispatcher {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<ChatMessage> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(CompletionError::new(CompletionErrorKind::Unavailable(
                "script exhausted".to_string(),
            ))))
    }
}

/// Returns a fixed match set for every question.
struct FixedMatcher {
    matches: Vec<Specification>,
}

#[async_trait]
impl FunctionMatcher for FixedMatcher {
    async fn top_matches(&self, _question: &str) -> PolyResult<(Vec<Specification>, MatchStats)> {
        let stats = MatchStats {
            match_count: self.matches.len(),
            total: 12,
            prompt: None,
        };
        Ok((self.matches.clone(), stats))
    }
}

#[derive(Default)]
struct MemoryStore {
    conversations: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

impl MemoryStore {
    fn messages(&self, user_id: &str) -> Vec<ChatMessage> {
        self.conversations
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn append(&self, user_id: &str, message: &ChatMessage) -> PolyResult<()> {
        self.conversations
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(message.clone());
        Ok(())
    }

    async fn list(&self, user_id: &str) -> PolyResult<Vec<ChatMessage>> {
        Ok(self.messages(user_id))
    }

    async fn clear(&self, user_id: &str) -> PolyResult<()> {
        self.conversations.lock().unwrap().remove(user_id);
        Ok(())
    }
}

fn sms_spec() -> Specification {
    serde_json::from_value(json!({
        "id": "ec66c324-80fe-4d9a-a5fa-2f7f38384155",
        "type": "apiFunction",
        "context": "comms.messaging",
        "name": "twilioSendSms",
        "description": "Sends SMS messages through Twilio's messaging service.",
        "function": {
            "arguments": [
                {
                    "name": "My_Phone_Number",
                    "required": true,
                    "type": {"kind": "primitive", "type": "string"},
                },
                {
                    "name": "message",
                    "required": true,
                    "type": {"kind": "primitive", "type": "string"},
                },
            ],
        },
    }))
    .unwrap()
}

fn answered(content: &str) -> CompletionResult<ChatMessage> {
    Ok(ChatMessage::assistant(content))
}

fn too_long() -> CompletionResult<ChatMessage> {
    Err(CompletionError::new(CompletionErrorKind::TooLong))
}

#[tokio::test]
async fn test_answer_surfaces_library_and_stats() {
    let dispatcher = ScriptedDispatcher::new(vec![answered("Use twilioSendSms.")]);
    let answerer = CompletionAnswerer::builder()
        .dispatcher(&dispatcher)
        .matcher(FixedMatcher {
            matches: vec![sms_spec()],
        })
        .build();

    let answer = answerer.answer("how do I send a text?").await.unwrap();

    assert_eq!(answer.content(), "Use twilioSendSms.");
    assert!(!answer.conversation_reset());
    assert_eq!(answer.stats().match_count, 1);
    assert_eq!(answer.stats().prompt.as_deref(), Some("how do I send a text?"));

    let requests = dispatcher.requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 2);
    assert!(messages[0]
        .content()
        .unwrap()
        .contains("poly.comms.messaging.twilioSendSms(My_Phone_Number: string, message: string)"));
    assert!(messages[1]
        .content()
        .unwrap()
        .starts_with(LIBRARY_QUESTION_PREFIX));
}

#[tokio::test]
async fn test_answer_without_matches_sends_bare_question() {
    let dispatcher = ScriptedDispatcher::new(vec![answered("No idea.")]);
    let answerer = CompletionAnswerer::builder()
        .dispatcher(&dispatcher)
        .matcher(FixedMatcher { matches: vec![] })
        .build();

    let answer = answerer.answer("what is the weather?").await.unwrap();

    assert_eq!(answer.content(), "No idea.");
    let requests = dispatcher.requests();
    assert_eq!(requests[0].messages.len(), 1);
    assert_eq!(
        requests[0].messages[0].content().unwrap(),
        "what is the weather?"
    );
}

#[tokio::test]
async fn test_system_prompt_and_model_override() {
    let dispatcher = ScriptedDispatcher::new(vec![answered("ok")]);
    let answerer = CompletionAnswerer::builder()
        .dispatcher(&dispatcher)
        .matcher(FixedMatcher { matches: vec![] })
        .system_prompt("You are the Poly assistant.")
        .model("gpt-4-0613")
        .build();

    answerer.answer("hello").await.unwrap();

    let requests = dispatcher.requests();
    let first = &requests[0].messages[0];
    assert!(matches!(first, ChatMessage::Text { role: Role::System, .. }));
    assert_eq!(first.content().unwrap(), "You are the Poly assistant.");
    assert_eq!(requests[0].model.as_deref(), Some("gpt-4-0613"));
}

#[tokio::test]
async fn test_answer_for_user_appends_history() {
    let dispatcher = ScriptedDispatcher::new(vec![answered("first"), answered("second")]);
    let store = MemoryStore::default();
    let answerer = CompletionAnswerer::builder()
        .dispatcher(&dispatcher)
        .matcher(FixedMatcher { matches: vec![] })
        .build();

    answerer
        .answer_for_user(&store, "user-1", "first question")
        .await
        .unwrap();
    answerer
        .answer_for_user(&store, "user-1", "second question")
        .await
        .unwrap();

    // Question plus reply per turn.
    let stored = store.messages("user-1");
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[1].content().unwrap(), "first");
    assert_eq!(stored[3].content().unwrap(), "second");

    // The second dispatch sees the stored history ahead of the new question.
    let requests = dispatcher.requests();
    assert_eq!(requests[1].messages.len(), 3);
    assert_eq!(requests[1].messages[0].content().unwrap(), "first question");
}

#[tokio::test]
async fn test_token_limit_resets_conversation_and_retries_once() {
    let dispatcher = ScriptedDispatcher::new(vec![too_long(), answered("fresh answer")]);
    let store = MemoryStore::default();
    store
        .append("user-1", &ChatMessage::user("old question"))
        .await
        .unwrap();
    store
        .append("user-1", &ChatMessage::assistant("old answer"))
        .await
        .unwrap();

    let answerer = CompletionAnswerer::builder()
        .dispatcher(&dispatcher)
        .matcher(FixedMatcher { matches: vec![] })
        .build();

    let answer = answerer
        .answer_for_user(&store, "user-1", "new question")
        .await
        .unwrap();

    assert!(answer.conversation_reset());
    assert_eq!(
        answer.content(),
        &format!("fresh answer{}", TOKEN_LIMIT_NOTICE)
    );
    assert!(store.messages("user-1").is_empty());

    // The retry drops the stored history and resends only the new messages.
    let requests = dispatcher.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].messages.len(), 3);
    assert_eq!(requests[1].messages.len(), 1);
    assert_eq!(requests[1].messages[0].content().unwrap(), "new question");
}

#[tokio::test]
async fn test_second_token_limit_propagates() {
    let dispatcher = ScriptedDispatcher::new(vec![too_long(), too_long()]);
    let answerer = CompletionAnswerer::builder()
        .dispatcher(&dispatcher)
        .matcher(FixedMatcher { matches: vec![] })
        .build();

    let err = answerer.answer("question").await.unwrap_err();
    assert!(matches!(err, PolyError::Completion(e) if e.is_too_long()));
    assert_eq!(dispatcher.requests().len(), 2);
}
