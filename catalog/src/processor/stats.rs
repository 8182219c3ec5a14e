// stats.rs
use super::health::health_status;
use crate::models::{CatalogStats, HealthLabel, Product};
use chrono::{DateTime, Utc};

impl CatalogStats {
    /// Summary-strip counts over the full collection.
    ///
    /// Always fed the unfiltered snapshot; toolbar filters never reach here.
    pub fn compute(products: &[Product], now: DateTime<Utc>) -> Self {
        products.iter().fold(
            CatalogStats {
                total: products.len(),
                ..CatalogStats::default()
            },
            |mut stats, p| {
                if p.is_certified_on_bi_platform {
                    stats.certified += 1;
                }
                if p.is_published {
                    stats.published += 1;
                }
                if health_status(p, now).label == HealthLabel::Healthy {
                    stats.healthy += 1;
                }
                stats
            },
        )
    }
}

pub fn compute_stats(products: &[Product], now: DateTime<Utc>) -> CatalogStats {
    CatalogStats::compute(products, now)
}
