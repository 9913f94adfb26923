//! Post Generation — prompt building plus exactly one completion call.
//!
//! Flow: build prompt pair → CompletionRequest → CompletionClient::complete → GeneratedPost.
//! No retry on failure: the caller sees the error and may resubmit.

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompt_builder::{build_brand_prompt, build_platform_prompt, PromptPair};
use crate::llm_client::{CompletionClient, CompletionRequest, MAX_TOKENS};
use crate::models::brand::{BrandContext, Platform};

/// Sampling temperature for topic-only posts.
pub const FREEFORM_TEMPERATURE: f32 = 0.8;
/// Higher variance for branded posts to bring out the brand's personality.
pub const BRANDED_TEMPERATURE: f32 = 0.9;

/// One generated draft. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPost {
    pub content: String,
    pub platform: Platform,
    pub tokens_used: u32,
}

/// Generates a post from a raw topic using only the platform's formatting rule.
pub async fn generate_post(
    llm: &dyn CompletionClient,
    topic: &str,
    platform: Platform,
) -> Result<GeneratedPost, AppError> {
    let prompt = build_platform_prompt(topic, platform);
    complete(llm, prompt, platform, FREEFORM_TEMPERATURE).await
}

/// Generates a post in the voice of `brand`.
pub async fn generate_branded_post(
    llm: &dyn CompletionClient,
    brand: &BrandContext,
    topic: &str,
    platform: Platform,
) -> Result<GeneratedPost, AppError> {
    let prompt = build_brand_prompt(brand, topic, platform);
    complete(llm, prompt, platform, BRANDED_TEMPERATURE).await
}

async fn complete(
    llm: &dyn CompletionClient,
    prompt: PromptPair,
    platform: Platform,
    temperature: f32,
) -> Result<GeneratedPost, AppError> {
    let request = CompletionRequest {
        messages: prompt.into_messages(),
        temperature,
        max_tokens: MAX_TOKENS,
    };

    let completion = llm.complete(&request).await?;

    info!(
        "Generated {} post (temperature={}, tokens_used={})",
        platform, temperature, completion.tokens_used
    );

    Ok(GeneratedPost {
        content: completion.content,
        platform,
        tokens_used: completion.tokens_used,
    })
}
