//! Prompt assembly and answer policy for Poly completions.
//!
//! The completion mode answers a free-text question by surfacing the
//! best-matching catalog specifications inside the prompt (the
//! "library" message) and asking the model to answer from them. Which
//! specifications match is the business of an external
//! keyword-extraction service behind the [`FunctionMatcher`] seam.

mod matcher;
mod policy;
mod prompt;
mod specification;
mod store;

pub use matcher::{FunctionMatcher, MatchStats};
pub use policy::{Answer, CompletionAnswerer, TOKEN_LIMIT_NOTICE};
pub use prompt::{
    build_prompt_messages, library_message, question_message, FUNCTION_PREFACE,
    LIBRARY_QUESTION_PREFIX, WEBHOOK_PREFACE,
};
pub use specification::{
    FunctionSignature, PropertySpec, PropertyType, SpecType, Specification,
};
pub use store::ConversationStore;
