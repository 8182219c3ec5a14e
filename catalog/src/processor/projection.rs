// projection.rs
use super::display::{badges, description_tooltip, owner_initials, status_pills};
use super::filter::{CertificationPartition, partition_by_certification, sort_products, visible_products};
use super::health::health_status;
use super::lifecycle::{lifecycle_age, lifecycle_entries};
use super::stats::compute_stats;
use crate::models::{
    BadgeVariant, CatalogStats, HealthStatus, LifecycleEntry, Product, StatusPill, ViewControls,
    ViewMode,
};
use crate::utils::dates::days_since;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// What the active view mode renders.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Layout {
    Grid(CertificationPartition),
    Expansion(CertificationPartition),
    Table { rows: Vec<Product> },
}

impl Layout {
    pub fn mode(&self) -> ViewMode {
        match self {
            Layout::Grid(_) => ViewMode::Grid,
            Layout::Expansion(_) => ViewMode::Expansion,
            Layout::Table { .. } => ViewMode::Table,
        }
    }

    /// Products in the order the layout presents them.
    pub fn products(&self) -> Vec<&Product> {
        match self {
            Layout::Grid(groups) | Layout::Expansion(groups) => groups
                .certified
                .iter()
                .chain(groups.uncertified.iter())
                .collect(),
            Layout::Table { rows } => rows.iter().collect(),
        }
    }
}

/// Everything the catalog screen needs for one render.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CatalogProjection {
    pub controls: ViewControls,
    pub now: DateTime<Utc>,
    pub stats: CatalogStats,
    /// Filtered and searched products, ordered by the toolbar sort key.
    pub visible: Vec<Product>,
    pub layout: Layout,
}

/// Per-row display fields shared by the card, panel and table views.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub initials: String,
    pub health: HealthStatus,
    pub age: String,
    pub days_since_update: i64,
    pub badges: Vec<BadgeVariant>,
}

impl ProductSummary {
    pub fn new(product: &Product, now: DateTime<Utc>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            owner: product.owner.clone(),
            initials: owner_initials(&product.owner),
            health: health_status(product, now),
            age: lifecycle_age(product.product_created_at, now),
            days_since_update: days_since(product.product_updated_at, now),
            badges: badges(product),
        }
    }
}

/// Drill-down view of one product.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub initials: String,
    pub health: HealthStatus,
    pub badges: Vec<BadgeVariant>,
    pub pills: [StatusPill; 2],
    pub lifecycle: Vec<LifecycleEntry>,
    pub tooltip: Option<String>,
}

impl ProductDetail {
    pub fn new(product: &Product, now: DateTime<Utc>) -> Self {
        Self {
            initials: owner_initials(&product.owner),
            health: health_status(product, now),
            badges: badges(product),
            pills: status_pills(product),
            lifecycle: lifecycle_entries(product, now),
            tooltip: description_tooltip(product),
            product: product.clone(),
        }
    }
}

/// Builds the full projection without caching.
///
/// `stats` is computed before any filtering is applied.
pub fn project(products: &[Product], controls: &ViewControls, now: DateTime<Utc>) -> CatalogProjection {
    let stats = compute_stats(products, now);
    build_projection(products, controls, now, stats)
}

pub(crate) fn build_projection(
    products: &[Product],
    controls: &ViewControls,
    now: DateTime<Utc>,
    stats: CatalogStats,
) -> CatalogProjection {
    let filtered = visible_products(products, controls.filter_status, &controls.search_query);

    let layout = match controls.view_mode {
        ViewMode::Grid => Layout::Grid(partition_by_certification(&filtered)),
        ViewMode::Expansion => Layout::Expansion(partition_by_certification(&filtered)),
        ViewMode::Table => Layout::Table {
            rows: partition_by_certification(&filtered).into_table_order(),
        },
    };

    let mut visible = filtered;
    sort_products(&mut visible, controls.sort_by);

    debug!(
        total = products.len(),
        visible = visible.len(),
        filter = %controls.filter_status,
        sort = %controls.sort_by,
        mode = %controls.view_mode,
        "Projected catalog view"
    );

    CatalogProjection {
        controls: controls.clone(),
        now,
        stats,
        visible,
        layout,
    }
}
