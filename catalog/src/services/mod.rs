pub mod catalog;
pub use catalog::{CatalogService, Clock};
