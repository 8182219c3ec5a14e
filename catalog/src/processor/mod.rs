//! Derivation engine: pure projections from a catalog snapshot plus toolbar
//! controls to the data each view renders. Nothing here mutates the store.

pub mod display;
pub mod filter;
pub mod health;
pub mod lifecycle;
pub mod memo;
pub mod projection;
pub mod stats;

pub use display::{badges, description_tooltip, owner_initials, status_pills};
pub use filter::{
    CertificationPartition, filter_by_status, matches_search, matches_status,
    partition_by_certification, sort_products, table_order, visible_products,
};
pub use health::health_status;
pub use lifecycle::{lifecycle_age, lifecycle_entries};
pub use memo::ProjectionCache;
pub use projection::{CatalogProjection, Layout, ProductDetail, ProductSummary, project};
pub use stats::compute_stats;
