//! Key-value blob storage and the tenant repository built on it

pub mod blob_store;
pub mod file_blob_store;
pub mod memory_blob_store;
pub mod tenant_repo_impl;

pub use blob_store::BlobStore;
pub use file_blob_store::FileBlobStore;
pub use memory_blob_store::MemoryBlobStore;
pub use tenant_repo_impl::BlobTenantRepository;
