use crate::models::Product;
use crate::store::ingest::parse_records;
use common::Result;

const SEED_PRODUCTS_JSON: &str = include_str!("../data/seed_products.json");

/// The built-in demo catalog, validated through the normal ingestion path.
pub fn seed_products() -> Result<Vec<Product>> {
    parse_records(SEED_PRODUCTS_JSON)
}
