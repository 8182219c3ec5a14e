// ingest.rs
use crate::models::{ExtendedAttributes, Product, ProductRecord};
use crate::utils::dates::parse_instant;
use common::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

impl TryFrom<ProductRecord> for Product {
    type Error = Error;

    fn try_from(record: ProductRecord) -> Result<Self> {
        if record.name.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "Product {} has an empty name",
                record.id
            )));
        }

        Ok(Product {
            id: record.id,
            product_created_at: parse_instant("product_createdAt", &record.product_created_at)?,
            product_updated_at: parse_instant("product_updatedAt", &record.product_updated_at)?,
            created_at: parse_instant("createdAt", &record.created_at)?,
            updated_at: parse_instant("updatedAt", &record.updated_at)?,
            name: record.name,
            description: record.description,
            owner: record.owner,
            is_certified_on_bi_platform: record.is_certified_on_bi_platform,
            is_certified_on_source: record.is_certified_on_source,
            is_published: record.is_published,
            has_extracts: record.has_extracts,
            extended: ExtendedAttributes {
                connected_count: record.connected_count,
                content_url: record.content_url,
                size: record.size,
                source_display_name: record.source_display_name,
                web_page_url: record.web_page_url,
            },
        })
    }
}

/// Validates a batch of raw records into products, preserving order.
///
/// The whole batch is rejected on the first bad record or repeated id.
pub fn validate_records(records: Vec<ProductRecord>) -> Result<Vec<Product>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());

    for record in records {
        let id = record.id;
        if !seen.insert(id) {
            warn!(id, "Rejecting catalog batch: duplicate product id");
            return Err(Error::DuplicateProduct(id));
        }

        let product = Product::try_from(record).inspect_err(|e| {
            warn!(id, error = %e, "Rejecting catalog batch: invalid product record");
        })?;
        products.push(product);
    }

    debug!(count = products.len(), "Validated product records");
    Ok(products)
}

pub fn parse_records(json: &str) -> Result<Vec<Product>> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    validate_records(records)
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "Read product source file");
    parse_records(&content)
}
