// health.rs
use crate::models::{HealthLabel, HealthStatus, Product};
use crate::utils::dates::days_since;
use chrono::{DateTime, Utc};

/// Updates younger than this many days are Healthy.
pub const HEALTHY_BELOW_DAYS: i64 = 14;
/// Updates younger than this many days (and not Healthy) are Stable.
pub const STABLE_BELOW_DAYS: i64 = 60;

const HEALTHY: HealthStatus = HealthStatus {
    label: HealthLabel::Healthy,
    color: "#2a9d6e",
    bg_color: "rgba(42,157,110,0.08)",
};

const STABLE: HealthStatus = HealthStatus {
    label: HealthLabel::Stable,
    color: "#b58a2b",
    bg_color: "rgba(181,138,43,0.08)",
};

const STALE: HealthStatus = HealthStatus {
    label: HealthLabel::Stale,
    color: "#c4553a",
    bg_color: "rgba(196,85,58,0.08)",
};

/// Maps a days-since-update count to a freshness class.
/// Negative counts (future-dated updates) are Healthy.
pub fn classify_days(days: i64) -> HealthStatus {
    if days < HEALTHY_BELOW_DAYS {
        HEALTHY
    } else if days < STABLE_BELOW_DAYS {
        STABLE
    } else {
        STALE
    }
}

pub fn health_status(product: &Product, now: DateTime<Utc>) -> HealthStatus {
    classify_days(days_since(product.product_updated_at, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixed_now, product_updated_days_ago};
    use chrono::Duration;

    #[test]
    fn test_breakpoints() {
        assert_eq!(classify_days(0).label, HealthLabel::Healthy);
        assert_eq!(classify_days(13).label, HealthLabel::Healthy);
        assert_eq!(classify_days(14).label, HealthLabel::Stable);
        assert_eq!(classify_days(59).label, HealthLabel::Stable);
        assert_eq!(classify_days(60).label, HealthLabel::Stale);
        assert_eq!(classify_days(10_000).label, HealthLabel::Stale);
    }

    #[test]
    fn test_monotonic_step() {
        let mut previous = classify_days(-30).label;
        for days in -29..=400 {
            let label = classify_days(days).label;
            assert!(label >= previous, "health regressed at day {days}");
            previous = label;
        }
    }

    #[test]
    fn test_future_dated_update_is_healthy() {
        let mut product = product_updated_days_ago(1, "Forecast", 0);
        product.product_updated_at = fixed_now() + Duration::days(5);
        assert_eq!(health_status(&product, fixed_now()).label, HealthLabel::Healthy);
    }

    #[test]
    fn test_uses_asset_timestamp_not_catalog_timestamp() {
        let mut product = product_updated_days_ago(1, "Ledger", 90);
        product.updated_at = fixed_now();
        assert_eq!(health_status(&product, fixed_now()).label, HealthLabel::Stale);
    }

    #[test]
    fn test_colors() {
        let stale = classify_days(61);
        assert_eq!(stale.color, "#c4553a");
        assert_eq!(stale.bg_color, "rgba(196,85,58,0.08)");
    }
}
