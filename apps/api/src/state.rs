use std::sync::Arc;

use crate::llm_client::CompletionClient;
use crate::store::{BrandStore, WaitlistStore};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup; each request gets a cheap clone.
#[derive(Clone)]
pub struct AppState {
    pub brands: Arc<dyn BrandStore>,
    pub waitlist: Arc<dyn WaitlistStore>,
    /// Injected so tests can substitute a scripted client.
    pub llm: Arc<dyn CompletionClient>,
}
