//! Prompt Builder — turns a topic (and optionally a brand snapshot) plus a platform
//! into the system/user prompt pair sent to the completion service.
//!
//! Pure functions: identical inputs always yield byte-identical prompts.

use crate::generation::prompts::{
    platform_guidelines, BRANDED_SYSTEM_TEMPLATE, BRANDED_USER_TEMPLATE, FALLBACK_AUDIENCE,
    FALLBACK_BRAND_NAME, FALLBACK_BRAND_VOICE, FREEFORM_SYSTEM_TEMPLATE,
};
use crate::llm_client::ChatMessage;
use crate::models::brand::{BrandContext, Platform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl PromptPair {
    /// Ordered message list for the completion client: system first, then user.
    pub fn into_messages(self) -> Vec<ChatMessage> {
        vec![ChatMessage::system(self.system), ChatMessage::user(self.user)]
    }
}

/// Platform-only mode: the user prompt is the topic verbatim.
pub fn build_platform_prompt(topic: &str, platform: Platform) -> PromptPair {
    let system = fill_template(
        FREEFORM_SYSTEM_TEMPLATE,
        &[("guidelines", platform_guidelines(platform))],
    );
    PromptPair {
        system,
        user: topic.to_string(),
    }
}

/// Brand mode. Missing brand fields degrade to neutral fallbacks; an empty topic
/// list drops the `Topics:` line.
pub fn build_brand_prompt(brand: &BrandContext, topic: &str, platform: Platform) -> PromptPair {
    let brand_name = brand_display_name(brand);
    let brand_voice = non_blank(brand.brand_voice.as_deref()).unwrap_or(FALLBACK_BRAND_VOICE);
    let audience = non_blank(brand.target_audience.as_deref()).unwrap_or(FALLBACK_AUDIENCE);

    let topics: Vec<&str> = brand
        .topics
        .iter()
        .flatten()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    let topics_line = if topics.is_empty() {
        String::new()
    } else {
        format!("Topics: {}\n", topics.join(", "))
    };

    let platform_upper = platform.as_str().to_uppercase();

    let system = fill_template(
        BRANDED_SYSTEM_TEMPLATE,
        &[
            ("brand_name", brand_name),
            ("brand_voice", brand_voice),
            ("target_audience", audience),
            ("topics_line", &topics_line),
            ("platform_upper", &platform_upper),
            ("guidelines", platform_guidelines(platform)),
        ],
    );
    let user = fill_template(
        BRANDED_USER_TEMPLATE,
        &[
            ("platform", platform.as_str()),
            ("topic", topic),
            ("brand_name", brand_name),
        ],
    );

    PromptPair { system, user }
}

/// Name the prompt addresses the brand by.
pub fn brand_display_name(brand: &BrandContext) -> &str {
    non_blank(brand.brand_name.as_deref()).unwrap_or(FALLBACK_BRAND_NAME)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Single-pass `{key}` substitution. Inserted values are never rescanned, so a
/// brand name containing `{topic}` stays literal. Unknown slots are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
