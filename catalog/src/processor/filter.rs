// filter.rs
use crate::models::{FilterStatus, Product, SortBy};
use crate::utils::text::{contains_ignore_case, locale_cmp};
use serde::Serialize;
use std::cmp::Ordering;

pub fn matches_status(product: &Product, status: FilterStatus) -> bool {
    match status {
        FilterStatus::All => true,
        FilterStatus::Certified => product.is_certified_on_bi_platform,
        FilterStatus::Published => product.is_published,
        FilterStatus::Draft => !product.is_published,
    }
}

/// Literal, case-insensitive substring match on name, owner and description.
pub fn matches_search(product: &Product, query: &str) -> bool {
    query.is_empty()
        || contains_ignore_case(&product.name, query)
        || contains_ignore_case(&product.owner, query)
        || contains_ignore_case(&product.description, query)
}

pub fn filter_by_status(products: &[Product], status: FilterStatus) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_status(p, status))
        .cloned()
        .collect()
}

/// Products passing both the status filter and the search box, in store order.
pub fn visible_products(products: &[Product], status: FilterStatus, query: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_status(p, status) && matches_search(p, query))
        .cloned()
        .collect()
}

pub fn compare_by_name(a: &Product, b: &Product) -> Ordering {
    locale_cmp(&a.name, &b.name)
}

fn compare(a: &Product, b: &Product, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => compare_by_name(a, b),
        // most recently refreshed first
        SortBy::Updated => b
            .product_updated_at
            .cmp(&a.product_updated_at)
            .then_with(|| compare_by_name(a, b)),
        SortBy::Owner => locale_cmp(&a.owner, &b.owner).then_with(|| compare_by_name(a, b)),
    }
}

/// Stable sort by the toolbar's sort key.
pub fn sort_products(products: &mut [Product], sort_by: SortBy) {
    products.sort_by(|a, b| compare(a, b, sort_by));
}

pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by(compare_by_name);
}

/// Disjoint, exhaustive split on `is_certified_on_bi_platform`.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct CertificationPartition {
    pub certified: Vec<Product>,
    pub uncertified: Vec<Product>,
}

impl CertificationPartition {
    pub fn len(&self) -> usize {
        self.certified.len() + self.uncertified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Certified bucket followed by uncertified bucket.
    pub fn into_table_order(self) -> Vec<Product> {
        let mut rows = self.certified;
        rows.extend(self.uncertified);
        rows
    }
}

/// Splits into certified and uncertified groups, each sorted by name.
pub fn partition_by_certification(products: &[Product]) -> CertificationPartition {
    let (mut certified, mut uncertified): (Vec<Product>, Vec<Product>) = products
        .iter()
        .cloned()
        .partition(|p| p.is_certified_on_bi_platform);

    sort_by_name(&mut certified);
    sort_by_name(&mut uncertified);

    CertificationPartition {
        certified,
        uncertified,
    }
}

/// Table rows: name-sorted certified products, then name-sorted uncertified ones.
///
/// This is a two-bucket concatenation, not a global name sort.
pub fn table_order(products: &[Product]) -> Vec<Product> {
    partition_by_certification(products).into_table_order()
}
