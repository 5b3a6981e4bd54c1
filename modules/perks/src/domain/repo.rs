use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::{NewPerk, Perk};

/// Failures a perk store can report.
///
/// Duplicate keys are a value of their own so callers never have to dig
/// driver error codes out of a generic error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    DuplicateKey { constraint: String },

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// Every method is a single store operation, atomic at the record level.
#[async_trait]
pub trait PerksRepository: Send + Sync {
    /// All perks, newest first.
    async fn list_all(&self) -> Result<Vec<Perk>, StoreError>;

    /// Perks whose title equals `title` exactly, newest first.
    async fn find_by_title(&self, title: &str) -> Result<Vec<Perk>, StoreError>;

    /// Load a perk by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Perk>, StoreError>;

    /// Persist a validated perk. The store assigns `id` and `created_at`.
    async fn create(&self, new_perk: NewPerk) -> Result<Perk, StoreError>;

    /// Set only `title` on the perk with `id`; returns the updated record,
    /// or `None` when nothing matched.
    async fn update_title(&self, id: Uuid, title: &str) -> Result<Option<Perk>, StoreError>;

    /// Delete by id. Returns true if a record was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
