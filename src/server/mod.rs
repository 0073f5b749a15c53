//! Server Module
//!
//! Server-side foundation: configuration loading, shared state and app
//! initialization.
//!
//! # Initialization Flow
//!
//! 1. **Configuration loading**: typed env config, hard failure on missing
//!    required variables
//! 2. **Pool + migrations**: connect PostgreSQL, run embedded migrations
//! 3. **State creation**: token service and blob store built once
//! 4. **Router creation**: routes and the admin gate assembled

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
