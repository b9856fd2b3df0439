//! Catalog Persistence Module
//!
//! Implements the file-backed document store.
//!
//! ## Core Concepts
//! - **Single document**: Both catalogs live in one JSON file, loaded fully
//!   into memory at startup.
//! - **Whole-file flush**: Every mutation rewrites the entire file before the
//!   operation reports success. No write-ahead log, no atomic rename; a crash
//!   mid-write can corrupt the store, which is accepted for this service.
//! - **Lookup**: Linear scan with case-insensitive title comparison.

pub mod error;
pub mod file;

#[cfg(test)]
mod tests;
