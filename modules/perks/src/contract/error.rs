use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PerksError {
    #[error("Perk not found: {id}")]
    NotFound { id: Uuid },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl PerksError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for PerksError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            PerkNotFound { id } => Self::not_found(id),
            e @ (DuplicatePerk | DuplicateTitle) => Self::conflict(e.to_string()),
            e @ (Validation(_) | TitleQueryRequired | TitleRequired) => {
                Self::validation(e.to_string())
            }
            Database { .. } => Self::internal(),
        }
    }
}
