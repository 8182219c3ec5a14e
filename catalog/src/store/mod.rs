pub mod ingest;

use crate::models::Product;
use common::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Immutable view of the catalog at one version.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub version: u64,
    pub products: Arc<Vec<Product>>,
}

impl Snapshot {
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Single source of truth for the product collection.
///
/// Readers clone an `Arc` snapshot; the writer swaps in a whole new
/// collection and bumps the version. Nothing mutates a published snapshot.
pub struct CatalogStore {
    current: RwLock<Snapshot>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        ensure_unique_ids(&products)?;
        info!(count = products.len(), "Catalog store initialised");
        Ok(Self {
            current: RwLock::new(Snapshot {
                version: 1,
                products: Arc::new(products),
            }),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(ingest::parse_records(json)?)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.current.read().clone()
    }

    pub fn version(&self) -> u64 {
        self.current.read().version
    }

    pub fn len(&self) -> usize {
        self.current.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.current.read().get(id).cloned()
    }

    /// Publishes a new collection, returning the new version.
    pub fn replace(&self, products: Vec<Product>) -> Result<u64> {
        ensure_unique_ids(&products)?;
        let mut current = self.current.write();
        current.version += 1;
        current.products = Arc::new(products);
        info!(
            version = current.version,
            count = current.products.len(),
            "Catalog snapshot replaced"
        );
        Ok(current.version)
    }
}

fn ensure_unique_ids(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    match products.iter().find(|p| !seen.insert(p.id)) {
        Some(dup) => Err(Error::DuplicateProduct(dup.id)),
        None => Ok(()),
    }
}
