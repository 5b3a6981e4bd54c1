use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::PerksError,
    model::{Perk, PerkDraft},
};

/// Public API trait for the perks module that other modules can use
#[async_trait]
pub trait PerksApi: Send + Sync {
    /// All perks, newest first
    async fn list_perks(&self) -> Result<Vec<Perk>, PerksError>;

    /// Perks with exactly this title, newest first
    async fn filter_perks(&self, title: &str) -> Result<Vec<Perk>, PerksError>;

    /// Get a perk by ID
    async fn get_perk(&self, id: Uuid) -> Result<Perk, PerksError>;

    /// Validate and create a new perk
    async fn create_perk(&self, draft: PerkDraft) -> Result<Perk, PerksError>;

    /// Rename a perk; no other field can change
    async fn update_perk_title(&self, id: Uuid, title: String) -> Result<Perk, PerksError>;

    /// Delete a perk by ID
    async fn delete_perk(&self, id: Uuid) -> Result<(), PerksError>;
}
