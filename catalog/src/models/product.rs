// product.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A governed data asset as held by the catalog store.
///
/// `product_created_at`/`product_updated_at` track the asset itself, while
/// `created_at`/`updated_at` track the catalog entry that registers it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub is_certified_on_bi_platform: bool,
    #[serde(default)]
    pub is_certified_on_source: bool,
    pub is_published: bool,
    #[serde(default)]
    pub has_extracts: bool,
    #[serde(rename = "product_createdAt")]
    pub product_created_at: DateTime<Utc>,
    #[serde(rename = "product_updatedAt")]
    pub product_updated_at: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extended: ExtendedAttributes,
}

/// Optional fields carried by the richer source model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ExtendedAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(rename = "sourceDisplayName", skip_serializing_if = "Option::is_none")]
    pub source_display_name: Option<String>,
    #[serde(rename = "webPageUrl", skip_serializing_if = "Option::is_none")]
    pub web_page_url: Option<String>,
}

/// Unvalidated record as it arrives from a source file or the seed data.
///
/// Dates stay as strings until [`crate::store::ingest`] validates them.
#[derive(Debug, Deserialize, Clone)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub is_certified_on_bi_platform: bool,
    #[serde(default)]
    pub is_certified_on_source: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub has_extracts: bool,
    #[serde(rename = "product_createdAt")]
    pub product_created_at: String,
    #[serde(rename = "product_updatedAt")]
    pub product_updated_at: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(default)]
    pub connected_count: Option<u32>,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(rename = "sourceDisplayName", default)]
    pub source_display_name: Option<String>,
    #[serde(rename = "webPageUrl", default)]
    pub web_page_url: Option<String>,
}
