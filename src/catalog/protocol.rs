//! Catalog Wire Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) exchanged with
//! clients. All bodies are JSON; the response shapes mirror the fields the
//! service has always returned (`data` plus a `status` or `message` marker).

use serde::{Deserialize, Serialize};

use super::types::Product;

// --- API Endpoints ---

/// Lists every record in a catalog.
pub const ENDPOINT_LIST: &str = "/all/:type";
/// Fetches (GET) or replaces (PUT) a single record by title.
pub const ENDPOINT_RECORD: &str = "/all/:type/:title";
/// Appends a new record to a catalog.
pub const ENDPOINT_CREATE: &str = "/create/:type";
/// Removes a record by title.
pub const ENDPOINT_DELETE: &str = "/:type/:title";

// --- Data Transfer Objects ---

/// Full-catalog response, returned by list-all and create.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogListResponse {
    /// Every record in the catalog, in document order.
    pub data: Vec<Product>,
    pub status: String,
}

/// Single-record response for title lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub data: Product,
    pub message: String,
}

/// Response for update and delete: the catalog as it stands after the write.
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub data: Vec<Product>,
    pub message: String,
}

/// Client and server error payload. Server faults carry a fixed generic
/// message; no internal detail is leaked.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Payload for a request body that failed field validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub status: String,
    /// Describes the first failing field.
    pub message: String,
}
