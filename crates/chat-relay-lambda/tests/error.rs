use chat_relay_bedrock::error::BedrockError;
use chat_relay_core::error::CoreError;
use chat_relay_core::response::HandlerResult;
use chat_relay_lambda::error::{ErrorKind, RelayError};

#[test]
fn every_kind_maps_to_500() {
    let errors = [
        RelayError::from(CoreError::MissingField("body".to_string())),
        RelayError::from(BedrockError::Http { status: 403, message: "denied".to_string() }),
        RelayError::from(BedrockError::Transport("refused".to_string())),
        RelayError::from(BedrockError::NoContent),
        RelayError::from(BedrockError::Unexpected("eof".to_string())),
    ];

    for e in errors {
        let message = e.to_string();
        let result = HandlerResult::from(e);
        assert_eq!(result.status_code, 500);
        assert!(result.body.contains(&message));
    }
}

#[test]
fn kinds_classify_provider_errors() {
    let kind = |e: BedrockError| RelayError::from(e).kind();

    assert_eq!(
        kind(BedrockError::Http { status: 429, message: "throttled".to_string() }),
        ErrorKind::ProviderHttp
    );
    assert_eq!(kind(BedrockError::Transport("dns".to_string())), ErrorKind::ProviderTransport);
    assert_eq!(kind(BedrockError::NoContent), ErrorKind::ProviderContent);
    assert_eq!(kind(BedrockError::ErrorMessage("x".to_string())), ErrorKind::ProviderContent);
    assert_eq!(kind(BedrockError::Unexpected("x".to_string())), ErrorKind::Unexpected);
    assert_eq!(
        RelayError::from(CoreError::MissingField("body".to_string())).kind(),
        ErrorKind::MalformedRequest
    );
}

#[test]
fn provider_messages_pass_through_unchanged() {
    let e = RelayError::from(BedrockError::Http { status: 429, message: "throttled".to_string() });
    assert_eq!(e.to_string(), "Bedrock API HTTP Error 429: throttled");
}
