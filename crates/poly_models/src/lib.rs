//! Chat completion dispatcher for OpenAI-compatible providers.
//!
//! This crate implements the [`poly_core::Dispatcher`] seam against
//! any API that follows the OpenAI chat completions format, including
//! the legacy function-calling protocol (a `functions` array in the
//! request, a `function_call` object in the reply).

mod client;
mod conversions;
mod dto;

pub use client::ChatCompletionClient;
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatUsage, WireFunctionCall,
    WireMessage,
};
