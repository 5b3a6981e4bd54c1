use std::sync::Arc;

use crate::contract::model::{Perk, PerkDraft};
use crate::domain::error::DomainError;
use crate::domain::repo::{PerksRepository, StoreError};
use crate::domain::schema::PERK_SCHEMA;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Domain service with the perk rules.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PerksRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn PerksRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "perks.service.list_perks", skip(self))]
    pub async fn list_perks(&self) -> Result<Vec<Perk>, DomainError> {
        debug!("Listing perks");
        let perks = self.repo.list_all().await.map_err(database)?;
        debug!("Listed {} perks", perks.len());
        Ok(perks)
    }

    /// Exact, case-sensitive title match. An empty result is not an error.
    #[instrument(name = "perks.service.filter_perks", skip(self))]
    pub async fn filter_perks(&self, title: Option<&str>) -> Result<Vec<Perk>, DomainError> {
        let title = match title {
            Some(t) if !t.is_empty() => t,
            _ => return Err(DomainError::TitleQueryRequired),
        };

        debug!("Filtering perks by title");
        let perks = self.repo.find_by_title(title).await.map_err(database)?;
        debug!("Found {} perks", perks.len());
        Ok(perks)
    }

    #[instrument(name = "perks.service.get_perk", skip(self), fields(perk_id = %id))]
    pub async fn get_perk(&self, id: Uuid) -> Result<Perk, DomainError> {
        debug!("Getting perk by id");
        self.repo
            .find_by_id(id)
            .await
            .map_err(database)?
            .ok_or_else(|| DomainError::perk_not_found(id))
    }

    #[instrument(
        name = "perks.service.create_perk",
        skip(self, draft),
        fields(title = ?draft.title)
    )]
    pub async fn create_perk(&self, draft: PerkDraft) -> Result<Perk, DomainError> {
        info!("Creating new perk");

        let new_perk = PERK_SCHEMA.validate(draft)?;

        let perk = self.repo.create(new_perk).await.map_err(|e| match e {
            StoreError::DuplicateKey { constraint } => {
                warn!(%constraint, "Duplicate perk rejected");
                DomainError::DuplicatePerk
            }
            other => database(other),
        })?;

        info!("Successfully created perk with id={}", perk.id);
        Ok(perk)
    }

    /// Renames a perk. `title` is the only mutable field.
    #[instrument(name = "perks.service.update_title", skip(self), fields(perk_id = %id))]
    pub async fn update_title(&self, id: Uuid, title: Option<String>) -> Result<Perk, DomainError> {
        info!("Updating perk title");

        let title = title.ok_or(DomainError::TitleRequired)?;
        let title = PERK_SCHEMA.title.validate(Some(&title))?;

        let perk = self
            .repo
            .update_title(id, &title)
            .await
            .map_err(|e| match e {
                StoreError::DuplicateKey { constraint } => {
                    warn!(%constraint, "Duplicate title rejected");
                    DomainError::DuplicateTitle
                }
                other => database(other),
            })?
            .ok_or_else(|| DomainError::perk_not_found(id))?;

        info!("Successfully updated perk title");
        Ok(perk)
    }

    #[instrument(name = "perks.service.delete_perk", skip(self), fields(perk_id = %id))]
    pub async fn delete_perk(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting perk");

        let deleted = self.repo.delete(id).await.map_err(database)?;
        if !deleted {
            return Err(DomainError::perk_not_found(id));
        }

        info!("Successfully deleted perk");
        Ok(())
    }
}

fn database(e: StoreError) -> DomainError {
    DomainError::database(e.to_string())
}
