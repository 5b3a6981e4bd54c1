use crate::contract::model::{Perk, PerkCategory};
use crate::infra::storage::entity::{Category, Model as PerkEntity};

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: PerkEntity) -> Perk {
    Perk {
        id: entity.id,
        title: entity.title,
        description: entity.description,
        category: entity.category.into(),
        discount_percent: entity.discount_percent,
        merchant: entity.merchant,
        created_at: entity.created_at,
    }
}

impl From<Category> for PerkCategory {
    fn from(c: Category) -> Self {
        match c {
            Category::Food => PerkCategory::Food,
            Category::Tech => PerkCategory::Tech,
            Category::Travel => PerkCategory::Travel,
            Category::Fitness => PerkCategory::Fitness,
            Category::Other => PerkCategory::Other,
        }
    }
}

impl From<PerkCategory> for Category {
    fn from(c: PerkCategory) -> Self {
        match c {
            PerkCategory::Food => Category::Food,
            PerkCategory::Tech => Category::Tech,
            PerkCategory::Travel => Category::Travel,
            PerkCategory::Fitness => Category::Fitness,
            PerkCategory::Other => Category::Other,
        }
    }
}
