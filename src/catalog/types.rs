use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::store::error::StoreError;

/// One of the two fixed catalogs the document holds.
///
/// Parsed from the `:type` path segment; an unrecognized name is the
/// "unknown catalog" case and maps to a not-found response on every endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Freestore,
    Phonestore,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Freestore => "freestore",
            CatalogKind::Phonestore => "phonestore",
        }
    }
}

impl FromStr for CatalogKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freestore" => Ok(CatalogKind::Freestore),
            "phonestore" => Ok(CatalogKind::Phonestore),
            other => Err(StoreError::UnknownCatalog {
                name: other.to_string(),
            }),
        }
    }
}

/// A single product record.
///
/// Every field is a string, including the numeric-looking ones; the store
/// round-trips them verbatim. `title` is the identifier within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub price: String,
    #[serde(rename = "discountPercentage")]
    pub discount_percentage: String,
    pub rating: String,
    pub stock: String,
    pub brand: String,
    pub category: String,
}

impl Product {
    /// Case-insensitive title comparison, the only lookup the service does.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// The entire on-disk document: both catalogs, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub freestore: Vec<Product>,
    pub phonestore: Vec<Product>,
}

impl Document {
    pub fn list(&self, kind: CatalogKind) -> &Vec<Product> {
        match kind {
            CatalogKind::Freestore => &self.freestore,
            CatalogKind::Phonestore => &self.phonestore,
        }
    }

    pub fn list_mut(&mut self, kind: CatalogKind) -> &mut Vec<Product> {
        match kind {
            CatalogKind::Freestore => &mut self.freestore,
            CatalogKind::Phonestore => &mut self.phonestore,
        }
    }
}
