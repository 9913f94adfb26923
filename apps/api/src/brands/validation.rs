//! Server-side validation for brand creation.
//!
//! Turns the loosely-typed request into a `NewBrand`: trims text, drops blank
//! optional fields, de-duplicates topics and platforms, and rejects unknown enum values.

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::brand::{BrandVoice, NewBrand, Platform, ProfileType};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    pub owner_id: Option<Uuid>,
    pub profile_type: Option<String>,
    pub brand_name: Option<String>,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub brand_voice: Option<String>,
    pub topics: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
}

pub fn validate_new_brand(request: CreateBrandRequest) -> Result<NewBrand, AppError> {
    let owner_id = request
        .owner_id
        .ok_or_else(|| AppError::Validation("ownerId is required".to_string()))?;

    let brand_name = optional_text(request.brand_name)
        .ok_or_else(|| AppError::Validation("Brand name is required".to_string()))?;

    let profile_type = match request.profile_type.as_deref() {
        Some(raw) => raw.parse::<ProfileType>().map_err(invalid)?,
        None => ProfileType::default(),
    };

    let brand_voice = match request.brand_voice.as_deref() {
        Some(raw) => raw.parse::<BrandVoice>().map_err(invalid)?,
        None => BrandVoice::default(),
    };

    let mut topics: Vec<String> = Vec::new();
    for topic in request.topics.unwrap_or_default() {
        let topic = topic.trim();
        if !topic.is_empty() && !topics.iter().any(|t| t == topic) {
            topics.push(topic.to_string());
        }
    }

    let mut platforms: Vec<Platform> = Vec::new();
    for raw in request.platforms.unwrap_or_default() {
        let platform = raw.parse::<Platform>().map_err(invalid)?;
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }

    Ok(NewBrand {
        owner_id,
        profile_type,
        brand_name,
        description: optional_text(request.description),
        target_audience: optional_text(request.target_audience),
        brand_voice,
        topics,
        platforms,
    })
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn invalid(err: impl std::fmt::Display) -> AppError {
    AppError::Validation(err.to_string())
}
