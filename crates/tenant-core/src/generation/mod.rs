//! Content generation port and its contract types

pub mod credential;
pub mod provider;

pub use credential::ApiCredential;
pub use provider::{ContentGenerator, GeneratedContent, GenerationError};

#[cfg(test)]
pub use provider::MockContentGenerator;
