use tracing::{error, info};

use chat_relay_bedrock::client::BedrockClient;
use chat_relay_bedrock::endpoint::{region_from_arn, resolve_invoke_url};
use chat_relay_bedrock::error::BedrockError;
use chat_relay_bedrock::wire::InferenceRequest;
use chat_relay_core::models::chat::{ChatReply, ChatRequest};
use chat_relay_core::models::conversation::{ConversationMessage, with_user_turn};
use chat_relay_core::response::HandlerResult;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::event::InvocationEvent;

/// Relays one chat turn to Bedrock and returns the extended conversation.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    config: RelayConfig,
    bedrock: BedrockClient,
}

impl ChatRelay {
    pub fn new(config: RelayConfig, bedrock: BedrockClient) -> Self {
        Self { config, bedrock }
    }

    /// Build the relay and its HTTP client from `config`.
    pub fn from_config(config: RelayConfig) -> Result<Self, BedrockError> {
        let bedrock = BedrockClient::new(config.bearer_token.clone())?;
        Ok(Self::new(config, bedrock))
    }

    /// Handle one invocation. Never fails: errors become a 500 result.
    ///
    /// `function_arn` is the invoked function's ARN; its region selects the
    /// Bedrock runtime endpoint.
    pub async fn handle(&self, event: InvocationEvent, function_arn: &str) -> HandlerResult {
        let region = region_from_arn(function_arn);
        let invoke_url = resolve_invoke_url(
            self.config.endpoint_url.as_deref(),
            region,
            &self.config.model_id,
        );

        info!(invoke_url = %invoke_url, region, "Bedrock invoke URL");
        info!(model_id = %self.config.model_id, "using model");

        match self.relay(&event, &invoke_url).await {
            Ok(reply) => HandlerResult::success(&reply),
            Err(e) => Self::reject(e),
        }
    }

    /// Log `e` and flatten it into the 500 result.
    pub fn reject(e: RelayError) -> HandlerResult {
        error!(kind = %e.kind(), error = %e, "chat relay failed");
        e.into()
    }

    async fn relay(
        &self,
        event: &InvocationEvent,
        invoke_url: &str,
    ) -> Result<ChatReply, RelayError> {
        info!(
            event = %serde_json::to_string(event).unwrap_or_default(),
            "received event"
        );

        if let Some(claims) = event.claims() {
            info!(user = claims.identity().unwrap_or("unknown"), "authenticated user");
        }

        let request = ChatRequest::from_body(event.body.as_deref())?;
        info!(message = %request.message, "processing message");

        let mut conversation = with_user_turn(&request.conversation_history, &request.message);

        let payload = InferenceRequest::from_conversation(&conversation);
        let response = self.bedrock.invoke(invoke_url, &payload).await?;
        let reply = response.reply_text()?.to_string();

        conversation.push(ConversationMessage::assistant(reply.clone()));

        Ok(ChatReply::new(reply, conversation))
    }
}
