use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Returned by the strict `FromStr` impls when a value is outside its enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.field, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Personal,
    Business,
    Agency,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Personal => "personal",
            ProfileType::Business => "business",
            ProfileType::Agency => "agency",
        }
    }
}

impl FromStr for ProfileType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(ProfileType::Personal),
            "business" => Ok(ProfileType::Business),
            "agency" => Ok(ProfileType::Agency),
            _ => Err(UnknownVariant {
                field: "profileType",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandVoice {
    #[default]
    Casual,
    Professional,
    Humorous,
    Inspirational,
}

impl BrandVoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandVoice::Casual => "casual",
            BrandVoice::Professional => "professional",
            BrandVoice::Humorous => "humorous",
            BrandVoice::Inspirational => "inspirational",
        }
    }
}

impl FromStr for BrandVoice {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "casual" => Ok(BrandVoice::Casual),
            "professional" => Ok(BrandVoice::Professional),
            "humorous" => Ok(BrandVoice::Humorous),
            "inspirational" => Ok(BrandVoice::Inspirational),
            _ => Err(UnknownVariant {
                field: "brandVoice",
                value: s.to_string(),
            }),
        }
    }
}

/// Target social network. Each variant has a fixed formatting rule
/// (see `generation::prompts::platform_guidelines`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
}

impl Platform {
    #[cfg(test)]
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Tiktok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Lenient lookup used by generation: missing or unknown values
    /// fall back to Instagram instead of failing the request.
    pub fn resolve(raw: Option<&str>) -> Platform {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "twitter" | "x" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::Linkedin),
            "tiktok" => Ok(Platform::Tiktok),
            _ => Err(UnknownVariant {
                field: "platform",
                value: s.to_string(),
            }),
        }
    }
}

/// A persisted brand profile as stored in the `brands` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BrandRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub profile_type: String,
    pub brand_name: String,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub brand_voice: String,
    pub topics: Vec<String>,
    pub platforms: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for inserting a brand profile.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    pub owner_id: Uuid,
    pub profile_type: ProfileType,
    pub brand_name: String,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub brand_voice: BrandVoice,
    pub topics: Vec<String>,
    pub platforms: Vec<Platform>,
}

/// Brand snapshot attached to a branded generation request.
///
/// Every field is optional: a partial brand still produces a (weaker) prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContext {
    pub brand_name: Option<String>,
    pub brand_voice: Option<String>,
    pub target_audience: Option<String>,
    pub topics: Option<Vec<String>>,
}

impl From<&BrandRow> for BrandContext {
    fn from(row: &BrandRow) -> Self {
        Self {
            brand_name: Some(row.brand_name.clone()),
            brand_voice: Some(row.brand_voice.clone()),
            target_audience: row.target_audience.clone(),
            topics: Some(row.topics.clone()),
        }
    }
}
