//! Waitlist signups for the landing page.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;
use crate::store::StoreError;

pub const ALREADY_ON_WAITLIST: &str = "This email is already on the waitlist";
pub const JOINED_WAITLIST: &str = "You're on the list!";

#[derive(Debug, Deserialize)]
pub struct JoinWaitlistRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JoinWaitlistResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Trims and lower-cases `raw`, then checks it looks like `local@domain.tld`.
pub fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ))
    }
}

/// POST /api/waitlist
pub async fn handle_join_waitlist(
    State(state): State<AppState>,
    AppJson(req): AppJson<JoinWaitlistRequest>,
) -> Result<(StatusCode, Json<JoinWaitlistResponse>), AppError> {
    let email = normalize_email(req.email.as_deref().unwrap_or_default())?;

    state
        .waitlist
        .join_waitlist(&email)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => AppError::Conflict(ALREADY_ON_WAITLIST.to_string()),
            other => other.into(),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(JoinWaitlistResponse {
            success: true,
            message: JOINED_WAITLIST,
        }),
    ))
}
