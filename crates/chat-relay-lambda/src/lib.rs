//! chat-relay-lambda
//!
//! API Gateway → Lambda → Bedrock chat relay. The [`handler::ChatRelay`]
//! turns one invocation event into one HTTP-shaped result; the router wires
//! it into `lambda_http`.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
