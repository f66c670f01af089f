//! chat-relay-core
//!
//! Pure domain types for the chat relay: conversation messages, the inbound
//! chat body, and the HTTP-shaped result returned to API Gateway.
//! No I/O and no AWS dependency.

pub mod error;
pub mod models;
pub mod response;
