use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::contract::model::{Perk, PerkCategory, PerkDraft};

/// Wire form of a perk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDto {
    Food,
    Tech,
    Travel,
    Fitness,
    Other,
}

/// REST DTO for perk representation with serde/utoipa
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerkDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: CategoryDto,
    pub discount_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Single perk wrapped as `{ "perk": ... }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PerkEnvelope {
    pub perk: PerkDto,
}

/// REST DTO for creating a perk. Nothing is enforced here; the perk schema
/// validates the payload and fills defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerkReq {
    #[schema(min_length = 2)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "food")]
    pub category: Option<String>,
    #[schema(minimum = 0, maximum = 100)]
    pub discount_percent: Option<f64>,
    pub merchant: Option<String>,
}

/// REST DTO for the title-only update; any other field is rejected
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePerkTitleReq {
    #[schema(min_length = 2)]
    pub title: Option<String>,
}

/// Acknowledgement returned by delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAck {
    pub ok: bool,
}

/// REST DTO for the `title` query parameter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Exact, case-sensitive title to match
    pub title: Option<String>,
}

// Conversion implementations between REST DTOs and contract models

impl From<PerkCategory> for CategoryDto {
    fn from(c: PerkCategory) -> Self {
        match c {
            PerkCategory::Food => Self::Food,
            PerkCategory::Tech => Self::Tech,
            PerkCategory::Travel => Self::Travel,
            PerkCategory::Fitness => Self::Fitness,
            PerkCategory::Other => Self::Other,
        }
    }
}

impl From<Perk> for PerkDto {
    fn from(perk: Perk) -> Self {
        Self {
            id: perk.id,
            title: perk.title,
            description: perk.description,
            category: perk.category.into(),
            discount_percent: perk.discount_percent,
            merchant: perk.merchant,
            created_at: perk.created_at,
        }
    }
}

impl From<Perk> for PerkEnvelope {
    fn from(perk: Perk) -> Self {
        Self { perk: perk.into() }
    }
}

impl From<CreatePerkReq> for PerkDraft {
    fn from(req: CreatePerkReq) -> Self {
        Self {
            title: req.title,
            description: req.description,
            category: req.category,
            discount_percent: req.discount_percent,
            merchant: req.merchant,
        }
    }
}
