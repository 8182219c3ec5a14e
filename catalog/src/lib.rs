pub mod models;
pub mod processor;
pub mod report;
pub mod seed;
pub mod services;
pub mod store;
pub mod utils;

use common::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // ignore an already-installed subscriber
    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{ExtendedAttributes, Product};
    use crate::seed::seed_products;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 16, 0, 0, 0).unwrap()
    }

    pub fn product(id: i64, name: &str, certified: bool, published: bool) -> Product {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Product {
            id,
            name: name.to_string(),
            description: format!("{} dataset", name),
            owner: "Test Owner".to_string(),
            is_certified_on_bi_platform: certified,
            is_certified_on_source: false,
            is_published: published,
            has_extracts: false,
            product_created_at: created,
            product_updated_at: fixed_now() - Duration::days(2),
            created_at: created,
            updated_at: fixed_now() - Duration::days(1),
            extended: ExtendedAttributes::default(),
        }
    }

    pub fn product_updated_days_ago(id: i64, name: &str, days: i64) -> Product {
        let mut p = product(id, name, true, true);
        p.product_updated_at = fixed_now() - Duration::days(days);
        p
    }

    pub fn seed_product(id: i64) -> Product {
        seed_products()
            .unwrap()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }
}
