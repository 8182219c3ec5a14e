// lifecycle.rs
use crate::models::{LifecycleEntry, Product};
use crate::utils::dates::{MILLIS_PER_DAY, days_since};
use chrono::{DateTime, Utc};

/// Months are a flat 30 days, not calendar months.
const MILLIS_PER_MONTH: i64 = MILLIS_PER_DAY * 30;

/// Human-readable age of `date` relative to `now`.
pub fn lifecycle_age(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let months = (now - date).num_milliseconds().div_euclid(MILLIS_PER_MONTH);

    if months < 1 {
        return "< 1 month".to_string();
    }
    if months == 1 {
        return "1 month".to_string();
    }
    if months < 12 {
        return format!("{} months", months);
    }

    let years = months / 12;
    let remainder = months % 12;
    if remainder > 0 {
        format!("{}y {}m", years, remainder)
    } else {
        format!("{}y", years)
    }
}

/// Timeline cards for the detail panel, asset dates first.
pub fn lifecycle_entries(product: &Product, now: DateTime<Utc>) -> Vec<LifecycleEntry> {
    vec![
        LifecycleEntry {
            label: "Product Created".to_string(),
            date: product.product_created_at,
            subtitle: format!("Age: {}", lifecycle_age(product.product_created_at, now)),
        },
        LifecycleEntry {
            label: "Last Refreshed".to_string(),
            date: product.product_updated_at,
            subtitle: format!("{}d ago", days_since(product.product_updated_at, now)),
        },
        LifecycleEntry {
            label: "Registered".to_string(),
            date: product.created_at,
            subtitle: "Catalog entry".to_string(),
        },
        LifecycleEntry {
            label: "Catalog Updated".to_string(),
            date: product.updated_at,
            subtitle: "Metadata sync".to_string(),
        },
    ]
}
