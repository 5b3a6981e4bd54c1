use thiserror::Error;
use uuid::Uuid;

use crate::domain::schema::ValidationError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("title query parameter is required")]
    TitleQueryRequired,

    #[error("title is required")]
    TitleRequired,

    #[error("perk not found")]
    PerkNotFound { id: Uuid },

    /// Unique index violated while creating.
    #[error("duplicate perk for this merchant")]
    DuplicatePerk,

    /// Unique index violated while renaming.
    #[error("duplicate title already exists")]
    DuplicateTitle,

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn perk_not_found(id: Uuid) -> Self {
        Self::PerkNotFound { id }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::TitleQueryRequired | Self::TitleRequired
        )
    }
}
