//! Regional endpoint resolution.
//!
//! The Lambda function ARN is the only source of region information: the
//! relay calls the Bedrock runtime in the same region it is deployed in.

/// Region used when the function ARN carries none.
pub const DEFAULT_REGION: &str = "us-east-1";

const LAMBDA_ARN_PREFIX: &str = "arn:aws:lambda:";

/// Extract the region segment from a Lambda function ARN.
///
/// Looks for `arn:aws:lambda:<region>:` anywhere in `arn`, where `<region>`
/// is non-empty. Falls back to [`DEFAULT_REGION`].
pub fn region_from_arn(arn: &str) -> &str {
    arn.match_indices(LAMBDA_ARN_PREFIX)
        .find_map(|(idx, _)| {
            let rest = &arn[idx + LAMBDA_ARN_PREFIX.len()..];
            let (region, _) = rest.split_once(':')?;
            (!region.is_empty()).then_some(region)
        })
        .unwrap_or(DEFAULT_REGION)
}

/// Base URL of the Bedrock runtime in `region`.
pub fn runtime_base_url(region: &str) -> String {
    format!("https://bedrock-runtime.{region}.amazonaws.com")
}

/// Full `InvokeModel` URL for `model_id` under `base_url`.
///
/// The model ID is inserted as-is; inference profile IDs such as
/// `us.amazon.nova-lite-v1:0` keep their colon.
pub fn invoke_url(base_url: &str, model_id: &str) -> String {
    format!("{}/model/{model_id}/invoke", base_url.trim_end_matches('/'))
}

/// Resolve the invoke URL, preferring an explicit endpoint override over the
/// regional runtime host.
pub fn resolve_invoke_url(endpoint_override: Option<&str>, region: &str, model_id: &str) -> String {
    match endpoint_override {
        Some(base) => invoke_url(base, model_id),
        None => invoke_url(&runtime_base_url(region), model_id),
    }
}
