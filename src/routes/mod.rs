//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! - **`api_routes`** - the API route table with the admin gate
//! - **`router`** - top-level router: tracing, CORS, 404 fallback

/// API route table
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
