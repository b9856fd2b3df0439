//! Store error types.

use thiserror::Error;

/// Result type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures a store operation can report.
///
/// The first three variants are client conditions the handlers turn into
/// 4xx responses; `Io` and `Serialize` are internal faults that surface as a
/// generic server error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The `:type` path segment named neither catalog.
    #[error("unknown catalog: {name}")]
    UnknownCatalog { name: String },

    /// No record in the catalog matches the title.
    #[error("no record titled {title:?}")]
    NotFound { title: String },

    /// A record with the same title (case-insensitive) already exists.
    #[error("record titled {title:?} already exists")]
    DuplicateTitle { title: String },

    /// Reading or writing the document file failed.
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),

    /// The document file could not be parsed or serialized.
    #[error("store serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}
