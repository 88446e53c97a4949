//! Bedrock-backed interpretation generation.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use crate::error::InterpretError;
use crate::prompt;
use crate::request::InterpretationRequest;

/// Upper bound on the generated interpretation; four short sections fit
/// comfortably.
const MAX_TOKENS: i32 = 2000;

/// Generate a narrative interpretation of a scored administration via the
/// Bedrock Converse API.
///
/// Returns the model's text verbatim. Fails on invocation errors, on a
/// response without a message, and on an empty interpretation; the caller's
/// numeric results stay valid either way.
pub async fn generate_interpretation(
    config: &aws_config::SdkConfig,
    model_id: &str,
    request: &InterpretationRequest,
) -> Result<String, InterpretError> {
    let request_id = Uuid::new_v4();
    info!(request_id = %request_id, model = model_id, "starting interpretation");

    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(prompt::user_message(request)))
        .build()
        .map_err(|e| InterpretError::Invocation(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(prompt::SYSTEM_PROMPT.to_string()))
        .messages(message)
        .inference_config(
            InferenceConfiguration::builder()
                .max_tokens(MAX_TOKENS)
                .build(),
        )
        .send()
        .await
        .map_err(|e| InterpretError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| InterpretError::ResponseParse("no message in response".to_string()))?;

    let interpretation = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if interpretation.trim().is_empty() {
        return Err(InterpretError::EmptyResponse);
    }

    info!(request_id = %request_id, chars = interpretation.len(), "interpretation complete");

    Ok(interpretation)
}
