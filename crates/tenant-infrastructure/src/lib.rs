//! # Tenant Infrastructure
//! 
//! Blob storage, the JSON tenant repository and the Gemini content client (adapters).

pub mod bootstrap;
pub mod error;
pub mod generation;
pub mod storage;

pub use bootstrap::{build_console, ConsoleRuntime};
pub use error::StorageError;
pub use generation::GeminiContentGenerator;
pub use storage::{BlobStore, BlobTenantRepository, FileBlobStore, MemoryBlobStore};
