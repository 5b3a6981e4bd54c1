//! SeaORM-backed repository implementation for the domain port.
//!
//! This struct is generic over `C: ConnectionTrait`, so you can construct it
//! with a `DatabaseConnection` **or** a transactional connection.

use anyhow::Context;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use uuid::Uuid;

use crate::contract::model::{NewPerk, Perk};
use crate::domain::repo::{PerksRepository, StoreError};
use crate::infra::storage::entity::{ActiveModel as PerkAM, Column, Entity as PerkEntity};
use crate::infra::storage::mapper::entity_to_contract;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmPerksRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmPerksRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

/// Turn a driver error into a store error, pulling out unique violations.
fn store_err(e: DbErr, what: &'static str) -> StoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(constraint)) => {
            StoreError::DuplicateKey { constraint }
        }
        _ => StoreError::Backend(anyhow::Error::new(e).context(what)),
    }
}

#[async_trait::async_trait]
impl<C> PerksRepository for SeaOrmPerksRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn list_all(&self) -> Result<Vec<Perk>, StoreError> {
        let rows = PerkEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("list_all failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Perk>, StoreError> {
        let rows = PerkEntity::find()
            .filter(Column::Title.eq(title))
            .order_by_desc(Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("find_by_title failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Perk>, StoreError> {
        let found = PerkEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn create(&self, new_perk: NewPerk) -> Result<Perk, StoreError> {
        let m = PerkAM {
            id: Set(Uuid::new_v4()),
            title: Set(new_perk.title),
            description: Set(new_perk.description),
            category: Set(new_perk.category.into()),
            discount_percent: Set(new_perk.discount_percent),
            merchant: Set(new_perk.merchant),
            created_at: Set(Utc::now()),
        };
        let inserted = m
            .insert(&self.conn)
            .await
            .map_err(|e| store_err(e, "insert failed"))?;
        Ok(entity_to_contract(inserted))
    }

    async fn update_title(&self, id: Uuid, title: &str) -> Result<Option<Perk>, StoreError> {
        // Only `id` and `title` are Set, so only `title` lands in the UPDATE.
        let m = PerkAM {
            id: Set(id),
            title: Set(title.to_string()),
            ..Default::default()
        };
        match m.update(&self.conn).await {
            Ok(updated) => Ok(Some(entity_to_contract(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(store_err(e, "update_title failed")),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = PerkEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
