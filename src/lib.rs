//! Product Catalog Service Library
//!
//! This library crate defines the modules that make up the catalog service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two subsystems:
//!
//! - **`catalog`**: The HTTP surface. Contains the record and catalog types,
//!   the wire protocol (request/response DTOs), request validation, and the
//!   axum handlers for the five CRUD endpoints.
//! - **`store`**: The persistence layer. Owns the single JSON document that
//!   holds both catalogs, serves reads from memory, and rewrites the whole
//!   file after every mutation.

pub mod catalog;
pub mod store;
