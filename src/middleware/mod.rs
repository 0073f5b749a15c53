//! Middleware Module
//!
//! HTTP middleware for the server. Currently provides the admin token gate
//! protecting every mutating route.

pub mod auth;

pub use auth::require_admin;
