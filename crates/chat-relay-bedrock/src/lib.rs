//! chat-relay-bedrock
//!
//! Bedrock runtime `InvokeModel` over plain HTTPS: regional endpoint
//! resolution, the messages wire format, and response validation.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod wire;
