use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::brand::{BrandRow, NewBrand};
use crate::models::waitlist::WaitlistRow;
use crate::store::{BrandStore, StoreError, WaitlistStore};

/// PostgreSQL-backed store for the `brands` and `waitlist` tables.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a unique-key violation to `StoreError::Conflict`; everything else stays a
/// database error.
fn map_insert_error(err: sqlx::Error, what: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Conflict(format!("{what} already exists"))
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl BrandStore for PgStore {
    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRow, StoreError> {
        let platforms: Vec<String> = brand
            .platforms
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();

        let row = sqlx::query_as::<_, BrandRow>(
            r#"
            INSERT INTO brands
                (id, owner_id, profile_type, brand_name, description,
                 target_audience, brand_voice, topics, platforms)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(brand.owner_id)
        .bind(brand.profile_type.as_str())
        .bind(&brand.brand_name)
        .bind(&brand.description)
        .bind(&brand.target_audience)
        .bind(brand.brand_voice.as_str())
        .bind(&brand.topics)
        .bind(&platforms)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "brand"))?;

        info!("Created brand {} for owner {}", row.id, row.owner_id);
        Ok(row)
    }

    async fn get_brand(&self, id: Uuid) -> Result<Option<BrandRow>, StoreError> {
        let row = sqlx::query_as::<_, BrandRow>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_brands(&self, owner_id: Uuid) -> Result<Vec<BrandRow>, StoreError> {
        let rows = sqlx::query_as::<_, BrandRow>(
            "SELECT * FROM brands WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[async_trait]
impl WaitlistStore for PgStore {
    async fn join_waitlist(&self, email: &str) -> Result<WaitlistRow, StoreError> {
        let row = sqlx::query_as::<_, WaitlistRow>(
            "INSERT INTO waitlist (email) VALUES ($1) RETURNING email, created_at",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "waitlist email"))?;

        info!("New waitlist signup");
        Ok(row)
    }
}
