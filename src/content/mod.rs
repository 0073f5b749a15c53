//! Content Module
//!
//! Resource handlers for the site's content types. Each submodule owns one
//! content table: its row model, its database operations and its HTTP
//! handlers.
//!
//! # Handler Pattern
//!
//! Every resource follows the same shape:
//!
//! - `GET` - public list (or composite object), no token required
//! - `POST` - create, returns the new row with 201
//! - `PUT` - update by id, returns the row, 404 when the id is unknown
//! - `DELETE` - body `{id}`, returns a confirmation, 404 when unknown
//!
//! Mutating verbs are gated by `middleware::auth::require_admin`; the gate
//! is applied at route registration, not inside the handlers.
//!
//! Concurrent edits to the same row are last-write-wins; each handler
//! issues at most one write statement.

/// Blog-style articles
pub mod articles;

/// Cleaning service cards
pub mod services;

/// Before/after photo gallery
pub mod gallery;

/// Animated hero slider
pub mod slider;

/// Sticky-scroll sections (standard and reversed)
pub mod sticky;

/// Free-form site text (key/value)
pub mod site_text;

use serde::{Deserialize, Serialize};

/// Delete request body shared by all resources
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteRequest {
    /// Row id to delete
    pub id: i32,
}

/// Confirmation body returned by delete handlers
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// User-facing confirmation message
    pub message: String,
}

impl DeletedResponse {
    /// Standard confirmation used by every resource
    pub fn item() -> Self {
        Self {
            message: "Item deleted successfully".to_string(),
        }
    }
}
