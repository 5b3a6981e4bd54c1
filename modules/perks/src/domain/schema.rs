//! Declarative validation schema for perk input.
//!
//! The schema is a set of independent per-field rules. Create validates a
//! whole [`PerkDraft`] through [`PerkSchema::validate`]; the title-only update
//! picks [`PerkSchema::title`] and runs that rule alone.

use thiserror::Error;

use crate::contract::model::{NewPerk, PerkCategory, PerkDraft};

/// Process-wide perk schema.
pub static PERK_SCHEMA: PerkSchema = PerkSchema {
    title: TitleRule {
        field: "title",
        min_len: 2,
    },
    description: TextRule {
        field: "description",
        default: Some(""),
    },
    category: CategoryRule {
        field: "category",
        fallback: PerkCategory::Other,
    },
    discount_percent: RangeRule {
        field: "discountPercent",
        min: 0.0,
        max: 100.0,
        fallback: 0.0,
    },
    merchant: TextRule {
        field: "merchant",
        default: None,
    },
};

/// A single rule failure. `message` is what clients get to see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct PerkSchema {
    pub title: TitleRule,
    pub description: TextRule,
    pub category: CategoryRule,
    pub discount_percent: RangeRule,
    pub merchant: TextRule,
}

impl PerkSchema {
    /// Validate a full draft, filling defaults for omitted optional fields.
    /// Fields are checked in declaration order; the first failure wins.
    pub fn validate(&self, draft: PerkDraft) -> Result<NewPerk, ValidationError> {
        let title = self.title.validate(draft.title.as_deref())?;
        let description = self
            .description
            .validate(draft.description)
            .unwrap_or_default();
        let category = self.category.validate(draft.category.as_deref())?;
        let discount_percent = self.discount_percent.validate(draft.discount_percent)?;
        let merchant = self.merchant.validate(draft.merchant);

        Ok(NewPerk {
            title,
            description,
            category,
            discount_percent,
            merchant,
        })
    }
}

/// Required, non-empty string with a minimum length in characters.
#[derive(Debug)]
pub struct TitleRule {
    pub field: &'static str,
    pub min_len: usize,
}

impl TitleRule {
    pub fn validate(&self, value: Option<&str>) -> Result<String, ValidationError> {
        let value = value
            .ok_or_else(|| ValidationError::new(self.field, format!("\"{}\" is required", self.field)))?;

        if value.is_empty() {
            return Err(ValidationError::new(
                self.field,
                format!("\"{}\" is not allowed to be empty", self.field),
            ));
        }
        if value.chars().count() < self.min_len {
            return Err(ValidationError::new(
                self.field,
                format!(
                    "\"{}\" length must be at least {} characters long",
                    self.field, self.min_len
                ),
            ));
        }
        Ok(value.to_string())
    }
}

/// Optional free text; empty strings are allowed.
#[derive(Debug)]
pub struct TextRule {
    pub field: &'static str,
    pub default: Option<&'static str>,
}

impl TextRule {
    pub fn validate(&self, value: Option<String>) -> Option<String> {
        value.or_else(|| self.default.map(str::to_string))
    }
}

/// Optional enum value with a fallback when omitted.
#[derive(Debug)]
pub struct CategoryRule {
    pub field: &'static str,
    pub fallback: PerkCategory,
}

impl CategoryRule {
    pub fn validate(&self, value: Option<&str>) -> Result<PerkCategory, ValidationError> {
        let Some(raw) = value else {
            return Ok(self.fallback);
        };
        raw.parse().map_err(|_| {
            let allowed = PerkCategory::ALL.map(PerkCategory::as_str).join(", ");
            ValidationError::new(
                self.field,
                format!("\"{}\" must be one of [{}]", self.field, allowed),
            )
        })
    }
}

/// Optional number within an inclusive range, with a fallback when omitted.
#[derive(Debug)]
pub struct RangeRule {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub fallback: f64,
}

impl RangeRule {
    pub fn validate(&self, value: Option<f64>) -> Result<f64, ValidationError> {
        let Some(v) = value else {
            return Ok(self.fallback);
        };
        if !v.is_finite() {
            return Err(ValidationError::new(
                self.field,
                format!("\"{}\" must be a number", self.field),
            ));
        }
        if v < self.min {
            return Err(ValidationError::new(
                self.field,
                format!(
                    "\"{}\" must be greater than or equal to {}",
                    self.field, self.min
                ),
            ));
        }
        if v > self.max {
            return Err(ValidationError::new(
                self.field,
                format!("\"{}\" must be less than or equal to {}", self.field, self.max),
            ));
        }
        Ok(v)
    }
}
