//! # Tenant Core
//! 
//! Domain entities, services, and ports for the tenant site console.

pub mod domain;
pub mod activity;
pub mod generation;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{ConsoleError, DomainError};
