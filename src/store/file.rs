use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::error::{Result, StoreError};
use crate::catalog::types::{CatalogKind, Document, Product};

/// File-backed store for the catalog document.
///
/// The document is loaded once at [`JsonStore::open`] and kept in memory
/// behind an `RwLock`; reads never touch the disk. Every mutating operation
/// serializes the whole document back to the file while still holding the
/// write lock, so within one process writes cannot interleave. Mutations
/// return a snapshot of the affected catalog so handlers can answer without
/// re-acquiring the lock.
pub struct JsonStore {
    path: PathBuf,
    document: RwLock<Document>,
}

impl JsonStore {
    /// Opens the store at `path`, parsing the existing file if there is one.
    ///
    /// A missing file yields an empty document; the first mutation creates
    /// it. A file that exists but does not parse is a startup error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Document::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every record in the catalog, in document order.
    pub async fn list(&self, kind: CatalogKind) -> Vec<Product> {
        self.document.read().await.list(kind).clone()
    }

    /// Looks up a record by case-insensitive title.
    pub async fn find(&self, kind: CatalogKind, title: &str) -> Result<Product> {
        self.document
            .read()
            .await
            .list(kind)
            .iter()
            .find(|record| record.title_matches(title))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                title: title.to_string(),
            })
    }

    /// Appends a record to the catalog and flushes the document.
    ///
    /// Fails with [`StoreError::DuplicateTitle`] if the catalog already holds
    /// a record with the same title under case-insensitive comparison.
    pub async fn create(&self, kind: CatalogKind, record: Product) -> Result<Vec<Product>> {
        let mut document = self.document.write().await;
        let list = document.list_mut(kind);

        if list.iter().any(|existing| existing.title_matches(&record.title)) {
            return Err(StoreError::DuplicateTitle {
                title: record.title,
            });
        }

        list.push(record);
        let snapshot = list.clone();
        self.flush(&document)?;
        Ok(snapshot)
    }

    /// Replaces the record matching `title` with `record` and flushes.
    ///
    /// The old record is removed and the replacement appended, so the updated
    /// record moves to the end of the catalog.
    pub async fn update(
        &self,
        kind: CatalogKind,
        title: &str,
        record: Product,
    ) -> Result<Vec<Product>> {
        let mut document = self.document.write().await;
        let list = document.list_mut(kind);

        if !list.iter().any(|existing| existing.title_matches(title)) {
            return Err(StoreError::NotFound {
                title: title.to_string(),
            });
        }

        list.retain(|existing| !existing.title_matches(title));
        list.push(record);
        let snapshot = list.clone();
        self.flush(&document)?;
        Ok(snapshot)
    }

    /// Removes the record matching `title` and flushes.
    pub async fn delete(&self, kind: CatalogKind, title: &str) -> Result<Vec<Product>> {
        let mut document = self.document.write().await;
        let list = document.list_mut(kind);

        if !list.iter().any(|existing| existing.title_matches(title)) {
            return Err(StoreError::NotFound {
                title: title.to_string(),
            });
        }

        list.retain(|existing| !existing.title_matches(title));
        let snapshot = list.clone();
        self.flush(&document)?;
        Ok(snapshot)
    }

    /// Rewrites the whole document file. Called with the write lock held.
    fn flush(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec(document)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}
