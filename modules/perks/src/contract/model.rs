use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Pure perk model for inter-module communication (no serde/utoipa)
#[derive(Debug, Clone, PartialEq)]
pub struct Perk {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: PerkCategory,
    pub discount_percent: f64,
    pub merchant: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PerkCategory {
    Food,
    Tech,
    Travel,
    Fitness,
    #[default]
    Other,
}

impl PerkCategory {
    pub const ALL: [PerkCategory; 5] = [
        PerkCategory::Food,
        PerkCategory::Tech,
        PerkCategory::Travel,
        PerkCategory::Fitness,
        PerkCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PerkCategory::Food => "food",
            PerkCategory::Tech => "tech",
            PerkCategory::Travel => "travel",
            PerkCategory::Fitness => "fitness",
            PerkCategory::Other => "other",
        }
    }
}

impl fmt::Display for PerkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for PerkCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Untrusted candidate for a new perk, exactly as submitted by a caller.
///
/// Every field is optional here; the perk schema decides what is required
/// and fills defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerkDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub discount_percent: Option<f64>,
    pub merchant: Option<String>,
}

/// A draft that passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerk {
    pub title: String,
    pub description: String,
    pub category: PerkCategory,
    pub discount_percent: f64,
    pub merchant: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_every_known_value() {
        for c in PerkCategory::ALL {
            assert_eq!(c.as_str().parse::<PerkCategory>(), Ok(c));
        }
    }

    #[test]
    fn category_parsing_is_case_sensitive() {
        assert_eq!(
            "Food".parse::<PerkCategory>(),
            Err(UnknownCategory("Food".into()))
        );
    }

    #[test]
    fn category_defaults_to_other() {
        assert_eq!(PerkCategory::default(), PerkCategory::Other);
    }
}
