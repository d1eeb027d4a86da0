//! Domain errors

use thiserror::Error;

use crate::generation::GenerationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("License limit reached: at most {limit} tenants can be provisioned")]
    CapacityExceeded { limit: usize },

    #[error("Tenant not found: {0}")]
    TenantNotFound(String),

    #[error("Deletion of tenant {0} was not confirmed")]
    DeletionNotConfirmed(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Errors surfaced to whoever drives the console.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Please provide a name and description first")]
    MissingGenerationInput,
}
