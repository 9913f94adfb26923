//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::generation::generator::{generate_branded_post, generate_post};
use crate::generation::prompt_builder::brand_display_name;
use crate::models::brand::{BrandContext, Platform};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub content: String,
    pub platform: Platform,
    pub tokens_used: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateBrandedRequest {
    pub brand: Option<BrandContext>,
    pub topic: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateBrandedResponse {
    pub success: bool,
    pub content: String,
    pub brand: String,
}

/// Returns `value` unchanged when it has non-whitespace text, or a validation
/// error naming `field`.
pub(crate) fn require_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Topic-only generation. `platform` defaults to instagram when absent or unknown.
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = require_text(request.prompt.as_deref(), "Prompt")?;
    let platform = Platform::resolve(request.platform.as_deref());

    let post = generate_post(state.llm.as_ref(), prompt, platform).await?;

    Ok(Json(GenerateResponse {
        success: true,
        content: post.content,
        platform: post.platform,
        tokens_used: post.tokens_used,
    }))
}

/// POST /api/generate-branded
///
/// Generation in the voice of an attached brand snapshot. Missing brand fields
/// are tolerated and produce a more generic prompt.
pub async fn handle_generate_branded(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateBrandedRequest>,
) -> Result<Json<GenerateBrandedResponse>, AppError> {
    let brand = request
        .brand
        .ok_or_else(|| AppError::Validation("Brand is required".to_string()))?;
    let topic = require_text(request.topic.as_deref(), "Topic")?;
    let platform = Platform::resolve(request.platform.as_deref());

    let post = generate_branded_post(state.llm.as_ref(), &brand, topic, platform).await?;

    Ok(Json(GenerateBrandedResponse {
        success: true,
        content: post.content,
        brand: brand_display_name(&brand).to_string(),
    }))
}
