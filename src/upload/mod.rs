//! Upload Module
//!
//! Multipart upload relay: files posted by the admin panel are forwarded
//! to an external blob store and served from its public URLs. The server
//! never persists file bytes itself.

/// Blob store client
pub mod storage;

/// Upload HTTP handler
pub mod handlers;

pub use handlers::upload_file;
pub use storage::BlobStore;
