use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "perks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    pub description: String,
    pub category: Category,
    pub discount_percent: f64,
    #[sea_orm(nullable)]
    pub merchant: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Stored form of a perk category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Category {
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "tech")]
    Tech,
    #[sea_orm(string_value = "travel")]
    Travel,
    #[sea_orm(string_value = "fitness")]
    Fitness,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
