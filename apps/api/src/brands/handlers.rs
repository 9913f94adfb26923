use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::brands::validation::{validate_new_brand, CreateBrandRequest};
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::generation::generator::generate_branded_post;
use crate::generation::handlers::{require_text, GenerateBrandedResponse};
use crate::models::brand::{BrandContext, BrandRow, Platform};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OwnerQuery {
    pub owner_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct BrandPostRequest {
    pub topic: Option<String>,
    pub platform: Option<String>,
}

/// POST /api/brands
pub async fn handle_create_brand(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateBrandRequest>,
) -> Result<(StatusCode, Json<BrandRow>), AppError> {
    let new_brand = validate_new_brand(req)?;
    let row = state.brands.create_brand(new_brand).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/brands?owner_id=
pub async fn handle_list_brands(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<OwnerQuery>,
) -> Result<Json<Vec<BrandRow>>, AppError> {
    let brands = state.brands.list_brands(params.owner_id).await?;
    Ok(Json(brands))
}

/// GET /api/brands/:id
pub async fn handle_get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BrandRow>, AppError> {
    let brand = load_brand(&state, id).await?;
    Ok(Json(brand))
}

/// POST /api/brands/:id/generate
///
/// Branded generation against a stored profile instead of a client-supplied snapshot.
pub async fn handle_generate_for_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<BrandPostRequest>,
) -> Result<Json<GenerateBrandedResponse>, AppError> {
    let topic = require_text(req.topic.as_deref(), "Topic")?;
    let platform = Platform::resolve(req.platform.as_deref());
    let brand = load_brand(&state, id).await?;

    let context = BrandContext::from(&brand);
    let post = generate_branded_post(state.llm.as_ref(), &context, topic, platform).await?;

    Ok(Json(GenerateBrandedResponse {
        success: true,
        content: post.content,
        brand: brand.brand_name,
    }))
}

async fn load_brand(state: &AppState, id: Uuid) -> Result<BrandRow, AppError> {
    state
        .brands
        .get_brand(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {id} not found")))
}
