pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::brands::handlers as brands;
use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::waitlist;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/generate", post(generation::handle_generate))
        .route(
            "/api/generate-branded",
            post(generation::handle_generate_branded),
        )
        // Brand profiles
        .route(
            "/api/brands",
            get(brands::handle_list_brands).post(brands::handle_create_brand),
        )
        .route("/api/brands/:id", get(brands::handle_get_brand))
        .route(
            "/api/brands/:id/generate",
            post(brands::handle_generate_for_brand),
        )
        // Waitlist
        .route("/api/waitlist", post(waitlist::handle_join_waitlist))
        .with_state(state)
}
