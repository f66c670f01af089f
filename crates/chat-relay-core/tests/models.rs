use chat_relay_core::error::CoreError;
use chat_relay_core::models::chat::{ChatReply, ChatRequest};
use chat_relay_core::models::conversation::{ConversationMessage, Role, with_user_turn};
use chat_relay_core::response::HandlerResult;

#[test]
fn request_without_history_defaults_to_empty() {
    let req = ChatRequest::from_body(Some(r#"{"message":"hi"}"#)).unwrap();
    assert_eq!(req.message, "hi");
    assert!(req.conversation_history.is_empty());
}

#[test]
fn request_with_history_preserves_order() {
    let body = r#"{
        "message": "and then?",
        "conversationHistory": [
            {"role": "user", "content": "first"},
            {"role": "assistant", "content": "second"}
        ]
    }"#;
    let req = ChatRequest::from_body(Some(body)).unwrap();
    assert_eq!(
        req.conversation_history,
        vec![
            ConversationMessage::user("first"),
            ConversationMessage::assistant("second"),
        ]
    );
}

#[test]
fn request_rejects_invalid_json() {
    let err = ChatRequest::from_body(Some("not json")).unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn request_rejects_missing_message() {
    let err = ChatRequest::from_body(Some(r#"{"conversationHistory":[]}"#)).unwrap_err();
    assert!(err.to_string().contains("message"));
}

#[test]
fn request_rejects_missing_body() {
    let err = ChatRequest::from_body(None).unwrap_err();
    assert!(matches!(err, CoreError::MissingField(ref field) if field == "body"));
}

#[test]
fn unknown_roles_round_trip_verbatim() {
    let msg: ConversationMessage =
        serde_json::from_str(r#"{"role":"system","content":"be terse"}"#).unwrap();
    assert_eq!(msg.role, Role::Other("system".to_string()));
    assert_eq!(
        serde_json::to_string(&msg).unwrap(),
        r#"{"role":"system","content":"be terse"}"#
    );
}

#[test]
fn user_turn_leaves_history_untouched() {
    let history = vec![ConversationMessage::assistant("hello")];
    let conversation = with_user_turn(&history, "hi");

    assert_eq!(history.len(), 1);
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation[1], ConversationMessage::user("hi"));
}

#[test]
fn success_result_carries_cors_headers() {
    let reply = ChatReply::new("hello".to_string(), vec![ConversationMessage::assistant("hello")]);
    let result = HandlerResult::success(&reply);

    assert_eq!(result.status_code, 200);
    assert_eq!(result.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(result.headers["Access-Control-Allow-Methods"], "OPTIONS,POST");
    assert_eq!(result.headers["Content-Type"], "application/json");

    let body: serde_json::Value = serde_json::from_str(&result.body).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["response"], "hello");
    assert_eq!(body["conversationHistory"][0]["role"], "assistant");
}

#[test]
fn failure_result_is_500_with_error_envelope() {
    let result = HandlerResult::failure("boom");

    assert_eq!(result.status_code, 500);
    assert_eq!(
        result.headers["Access-Control-Allow-Headers"],
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
    );
    assert_eq!(result.body, r#"{"success":false,"error":"boom"}"#);
}

#[test]
fn handler_result_serializes_in_proxy_format() {
    let value = serde_json::to_value(HandlerResult::failure("x")).unwrap();
    assert_eq!(value["statusCode"], 500);
    assert!(value["headers"].is_object());
    assert!(value["body"].is_string());
}

#[test]
fn extra_keys_round_trip_verbatim() {
    let input = serde_json::json!({
        "role": "user",
        "content": "a",
        "id": "m1",
        "timestamp": "2024-01-01T00:00:00Z"
    });
    let msg: ConversationMessage = serde_json::from_value(input.clone()).unwrap();

    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.extra["id"], "m1");
    assert_eq!(serde_json::to_value(&msg).unwrap(), input);
}
