//! Relay for chat messages to a generative-language HTTP API.
//!
//! [`ChatRelay`] posts a user's message to each configured model in turn
//! and returns the first successful response body unchanged. It holds no
//! application state beyond its HTTP client.

pub mod relay;

pub use relay::{ChatConfig, ChatError, ChatRelay};
