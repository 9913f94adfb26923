//! In-memory store used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::brand::{BrandRow, NewBrand};
use crate::models::waitlist::WaitlistRow;
use crate::store::{BrandStore, StoreError, WaitlistStore};

#[derive(Default)]
pub struct MemoryStore {
    brands: Mutex<Vec<BrandRow>>,
    waitlist: Mutex<Vec<WaitlistRow>>,
    /// When set, every call fails with a database error.
    pub broken: bool,
}

impl MemoryStore {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn waitlist_len(&self) -> usize {
        self.waitlist.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.broken {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BrandStore for MemoryStore {
    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRow, StoreError> {
        self.check()?;
        let mut brands = self.brands.lock().unwrap();
        // Strictly increasing timestamps keep newest-first ordering deterministic.
        let created_at = Utc::now() + Duration::milliseconds(brands.len() as i64);
        let row = BrandRow {
            id: Uuid::new_v4(),
            owner_id: brand.owner_id,
            profile_type: brand.profile_type.as_str().to_string(),
            brand_name: brand.brand_name,
            description: brand.description,
            target_audience: brand.target_audience,
            brand_voice: brand.brand_voice.as_str().to_string(),
            topics: brand.topics,
            platforms: brand
                .platforms
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            created_at,
        };
        brands.push(row.clone());
        Ok(row)
    }

    async fn get_brand(&self, id: Uuid) -> Result<Option<BrandRow>, StoreError> {
        self.check()?;
        let brands = self.brands.lock().unwrap();
        Ok(brands.iter().find(|b| b.id == id).cloned())
    }

    async fn list_brands(&self, owner_id: Uuid) -> Result<Vec<BrandRow>, StoreError> {
        self.check()?;
        let brands = self.brands.lock().unwrap();
        let mut owned: Vec<BrandRow> = brands
            .iter()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

#[async_trait]
impl WaitlistStore for MemoryStore {
    async fn join_waitlist(&self, email: &str) -> Result<WaitlistRow, StoreError> {
        self.check()?;
        let mut waitlist = self.waitlist.lock().unwrap();
        if waitlist.iter().any(|w| w.email == email) {
            return Err(StoreError::Conflict(
                "waitlist email already exists".to_string(),
            ));
        }
        let row = WaitlistRow {
            email: email.to_string(),
            created_at: Utc::now(),
        };
        waitlist.push(row.clone());
        Ok(row)
    }
}
