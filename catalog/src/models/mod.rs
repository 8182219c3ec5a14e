mod product;
mod view;

pub use product::{ExtendedAttributes, Product, ProductRecord};
pub use view::{
    BadgeVariant, CatalogStats, FilterStatus, HealthLabel, HealthStatus, LifecycleEntry,
    SortBy, StatusPill, ViewControls, ViewMode,
};
