//! Store Module Tests
//!
//! Validates the document lifecycle and the catalog operations.
//!
//! ## Test Scopes
//! - **Lifecycle**: Opening missing, valid, and corrupt files; reloading
//!   after a flush.
//! - **Operations**: Create/find/update/delete semantics, including the
//!   case-insensitive title invariant.

#[cfg(test)]
mod tests {
    use crate::catalog::types::{CatalogKind, Product};
    use crate::store::error::StoreError;
    use crate::store::file::JsonStore;

    fn record(title: &str) -> Product {
        Product {
            title: title.to_string(),
            description: "A product".to_string(),
            price: "100".to_string(),
            discount_percentage: "10".to_string(),
            rating: "4.5".to_string(),
            stock: "25".to_string(),
            brand: "Acme".to_string(),
            category: "gadgets".to_string(),
        }
    }

    // ============================================================
    // LIFECYCLE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();

        assert!(store.list(CatalogKind::Freestore).await.is_empty());
        assert!(store.list(CatalogKind::Phonestore).await.is_empty());
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, b"{ not json").unwrap();

        match JsonStore::open(&path) {
            Err(StoreError::Serialize(_)) => {}
            other => panic!("Expected a serialization error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_flushed_mutations_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = JsonStore::open(&path).unwrap();
        store
            .create(CatalogKind::Freestore, record("Notebook"))
            .await
            .unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        let found = reopened
            .find(CatalogKind::Freestore, "Notebook")
            .await
            .unwrap();
        assert_eq!(found.title, "Notebook");
    }

    #[tokio::test]
    async fn test_mutations_preserve_the_other_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = JsonStore::open(&path).unwrap();
        store
            .create(CatalogKind::Phonestore, record("Handset"))
            .await
            .unwrap();
        store
            .create(CatalogKind::Freestore, record("Notebook"))
            .await
            .unwrap();
        store
            .delete(CatalogKind::Freestore, "Notebook")
            .await
            .unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(reopened.list(CatalogKind::Phonestore).await.len(), 1);
        assert!(reopened.list(CatalogKind::Freestore).await.is_empty());
    }

    // ============================================================
    // OPERATION TESTS
    // ============================================================

    #[tokio::test]
    async fn test_find_matches_title_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();
        store
            .create(CatalogKind::Freestore, record("Notebook Pro"))
            .await
            .unwrap();

        let found = store
            .find(CatalogKind::Freestore, "NOTEBOOK pro")
            .await
            .unwrap();
        assert_eq!(found.title, "Notebook Pro");
    }

    #[tokio::test]
    async fn test_find_unknown_title_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();

        match store.find(CatalogKind::Freestore, "Nothing").await {
            Err(StoreError::NotFound { title }) => assert_eq!(title, "Nothing"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_title_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();
        store
            .create(CatalogKind::Freestore, record("Notebook"))
            .await
            .unwrap();

        match store.create(CatalogKind::Freestore, record("NOTEBOOK")).await {
            Err(StoreError::DuplicateTitle { .. }) => {}
            other => panic!("Expected DuplicateTitle, got {:?}", other),
        }

        // Same title in the other catalog is fine.
        store
            .create(CatalogKind::Phonestore, record("Notebook"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_replaces_record_and_moves_it_to_the_end() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();
        store
            .create(CatalogKind::Freestore, record("First Item"))
            .await
            .unwrap();
        store
            .create(CatalogKind::Freestore, record("Second Item"))
            .await
            .unwrap();

        let mut replacement = record("First Item");
        replacement.price = "250".to_string();
        let after = store
            .update(CatalogKind::Freestore, "first item", replacement)
            .await
            .unwrap();

        assert_eq!(after.len(), 2);
        assert_eq!(after[0].title, "Second Item");
        assert_eq!(after[1].title, "First Item");
        assert_eq!(after[1].price, "250");
    }

    #[tokio::test]
    async fn test_update_can_change_the_title() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();
        store
            .create(CatalogKind::Freestore, record("Old Title"))
            .await
            .unwrap();

        store
            .update(CatalogKind::Freestore, "Old Title", record("New Title"))
            .await
            .unwrap();

        assert!(store.find(CatalogKind::Freestore, "Old Title").await.is_err());
        assert!(store.find(CatalogKind::Freestore, "New Title").await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_title_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();

        match store
            .update(CatalogKind::Freestore, "Missing", record("Whatever"))
            .await
        {
            Err(StoreError::NotFound { .. }) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();
        store
            .create(CatalogKind::Phonestore, record("Handset"))
            .await
            .unwrap();

        let after = store
            .delete(CatalogKind::Phonestore, "HANDSET")
            .await
            .unwrap();
        assert!(after.is_empty());
        assert!(store.find(CatalogKind::Phonestore, "Handset").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_missing_title_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db.json")).unwrap();

        match store.delete(CatalogKind::Phonestore, "Missing").await {
            Err(StoreError::NotFound { .. }) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
