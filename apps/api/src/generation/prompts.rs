// All prompt text for the Generation module.
// Templates use `{placeholder}` slots filled by `prompt_builder::fill_template`.

use crate::models::brand::Platform;

/// Fixed per-platform formatting rule. Shared by freeform and branded prompts.
pub fn platform_guidelines(platform: Platform) -> &'static str {
    match platform {
        Platform::Instagram => {
            "Instagram caption (150-300 characters). \
            Include 2-3 relevant emojis and 3-5 hashtags at the end."
        }
        Platform::Twitter => {
            "Twitter/X post (max 280 characters). \
            Concise, punchy and engaging. Include 1-2 hashtags max."
        }
        Platform::Linkedin => {
            "LinkedIn post (300-500 words). \
            Professional tone. Focus on insights and value."
        }
        Platform::Tiktok => {
            "TikTok video script with: Hook (first 3 seconds), Main Content (20 seconds), \
            and Call-to-Action (5 seconds). Energetic and engaging."
        }
    }
}

/// System prompt for freeform generation. Replace `{guidelines}`.
pub const FREEFORM_SYSTEM_TEMPLATE: &str =
    "You are an expert social media content creator. Write a post in this format: {guidelines}";

/// System prompt for branded generation.
/// Replace: {brand_name}, {brand_voice}, {target_audience}, {topics_line},
///          {platform_upper}, {guidelines}
pub const BRANDED_SYSTEM_TEMPLATE: &str = r#"You are a social media content creator for "{brand_name}".

Brand Voice: {brand_voice}
Target Audience: {target_audience}
{topics_line}
Create content that:
- Matches the {brand_voice} tone perfectly
- Speaks directly to {target_audience}
- Sounds authentic and personal, not generic AI
- Uses natural language this brand would actually use

Platform: {platform_upper}
{guidelines}"#;

/// User prompt for branded generation. Replace: {platform}, {topic}, {brand_name}
pub const BRANDED_USER_TEMPLATE: &str = "Create a {platform} post about: {topic}

Make it sound like it's coming from {brand_name}, not a generic AI. Be authentic!";

/// Substituted when the brand snapshot has no name.
pub const FALLBACK_BRAND_NAME: &str = "this brand";
/// Substituted when the brand snapshot has no voice; matches the wizard default.
pub const FALLBACK_BRAND_VOICE: &str = "casual";
/// Substituted when the brand snapshot has no audience.
pub const FALLBACK_AUDIENCE: &str = "a general audience";
