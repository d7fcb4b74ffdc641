//! Core data types for the Poly completion and plugin services.
//!
//! This crate provides the foundation data types shared by the
//! dispatcher, the plugin protocol, and the prompt assembly crates.

mod credentials;
mod dispatcher;
mod function_spec;
mod message;
mod request;
mod role;

pub use credentials::Credentials;
pub use dispatcher::Dispatcher;
pub use function_spec::FunctionSpec;
pub use message::ChatMessage;
pub use request::{CompletionRequest, CompletionRequestBuilder};
pub use role::Role;
