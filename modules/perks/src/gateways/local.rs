use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::PerksApi,
    error::PerksError,
    model::{Perk, PerkDraft},
};
use crate::domain::service::Service;

/// Local implementation of the PerksApi trait that delegates to the domain service
pub struct PerksLocalClient {
    service: Arc<Service>,
}

impl PerksLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PerksApi for PerksLocalClient {
    async fn list_perks(&self) -> Result<Vec<Perk>, PerksError> {
        self.service.list_perks().await.map_err(Into::into)
    }

    async fn filter_perks(&self, title: &str) -> Result<Vec<Perk>, PerksError> {
        self.service
            .filter_perks(Some(title))
            .await
            .map_err(Into::into)
    }

    async fn get_perk(&self, id: Uuid) -> Result<Perk, PerksError> {
        self.service.get_perk(id).await.map_err(Into::into)
    }

    async fn create_perk(&self, draft: PerkDraft) -> Result<Perk, PerksError> {
        self.service.create_perk(draft).await.map_err(Into::into)
    }

    async fn update_perk_title(&self, id: Uuid, title: String) -> Result<Perk, PerksError> {
        self.service
            .update_title(id, Some(title))
            .await
            .map_err(Into::into)
    }

    async fn delete_perk(&self, id: Uuid) -> Result<(), PerksError> {
        self.service.delete_perk(id).await.map_err(Into::into)
    }
}
