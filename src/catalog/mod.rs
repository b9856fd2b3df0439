//! Catalog HTTP Module
//!
//! The request-facing half of the service.
//!
//! ## Core Concepts
//! - **Catalogs**: Two fixed, named product lists (`freestore`, `phonestore`).
//!   The path segment `:type` selects one; anything else is a 404.
//! - **Records**: Products identified by title, unique within a catalog under
//!   case-insensitive comparison. All fields are strings on the wire.
//! - **Validation**: Create and update bodies are checked field by field
//!   before touching the store; the first failure is reported to the client.

pub mod handlers;
pub mod protocol;
pub mod types;
pub mod validate;
