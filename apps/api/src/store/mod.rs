//! Persistence seam for brand profiles and waitlist signups.
//!
//! `AppState` carries `Arc<dyn BrandStore>` and `Arc<dyn WaitlistStore>`; production uses
//! `PgStore`, handler tests use the in-memory store.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::brand::{BrandRow, NewBrand};
use crate::models::waitlist::WaitlistRow;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique key already exists. Kept apart from `Database` so callers can
    /// show a specific message.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait BrandStore: Send + Sync {
    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRow, StoreError>;

    async fn get_brand(&self, id: Uuid) -> Result<Option<BrandRow>, StoreError>;

    /// Newest first.
    async fn list_brands(&self, owner_id: Uuid) -> Result<Vec<BrandRow>, StoreError>;
}

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Inserts `email` (already normalised). Duplicate emails yield `StoreError::Conflict`.
    async fn join_waitlist(&self, email: &str) -> Result<WaitlistRow, StoreError>;
}
