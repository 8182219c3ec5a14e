use catalog::models::{CatalogStats, FilterStatus, HealthLabel, SortBy, ViewControls, ViewMode};
use catalog::processor::{Layout, health_status, lifecycle_age, owner_initials, project};
use catalog::seed::seed_products;
use catalog::services::{CatalogService, Clock};
use catalog::store::CatalogStore;
use chrono::{DateTime, Duration, TimeZone, Utc};
use common::config::Settings;
use std::io::Write;

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 16, 0, 0, 0).unwrap()
}

fn seeded_service() -> CatalogService {
    let store = CatalogStore::new(seed_products().unwrap()).unwrap();
    CatalogService::new(store, ViewControls::default(), Clock::Fixed(reference_now()))
}

#[test]
fn seed_catalog_summary() {
    let service = seeded_service();
    assert_eq!(
        service.stats(),
        CatalogStats {
            total: 8,
            certified: 5,
            published: 6,
            healthy: 6,
        }
    );

    let healthy: Vec<i64> = seed_products()
        .unwrap()
        .iter()
        .filter(|p| health_status(p, reference_now()).label == HealthLabel::Healthy)
        .map(|p| p.id)
        .collect();
    assert_eq!(healthy, [1, 3, 4, 6, 7, 8]);
}

#[test]
fn grid_expansion_and_table_share_buckets() {
    let service = seeded_service();

    let grid = service.projection();
    let grid_order: Vec<i64> = grid.layout.products().iter().map(|p| p.id).collect();

    service.set_view_mode(ViewMode::Expansion);
    let expansion = service.projection();
    let expansion_order: Vec<i64> = expansion.layout.products().iter().map(|p| p.id).collect();

    service.set_view_mode(ViewMode::Table);
    let table = service.projection();
    let table_order: Vec<i64> = table.layout.products().iter().map(|p| p.id).collect();

    // certified: CLV, Financial Close, Marketing, Usage Telemetry, Revenue
    // uncertified: Risk Exposure, Supply Chain, Workforce
    assert_eq!(table_order, [2, 8, 5, 7, 1, 6, 3, 4]);
    assert_eq!(grid_order, table_order);
    assert_eq!(expansion_order, table_order);
    assert!(matches!(table.layout, Layout::Table { .. }));
}

#[test]
fn toolbar_changes_leave_stats_alone() {
    let service = seeded_service();
    let baseline = service.stats();

    for status in FilterStatus::ALL {
        service.set_filter_status(status);
        for query in ["", "webb", "velocity", "no such product"] {
            service.set_search_query(query);
            assert_eq!(service.projection().stats, baseline);
        }
    }
    assert_eq!(service.cache().stats_computations(), 1);
}

#[test]
fn snapshot_replacement_updates_stats() {
    let service = seeded_service();
    let mut products = seed_products().unwrap();
    products.retain(|p| p.is_published);
    service.replace_products(products).unwrap();

    let stats = service.stats();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.published, 6);
}

#[test]
fn sort_keys_order_flat_list() {
    let service = seeded_service();

    service.set_sort_by(SortBy::Owner);
    let owners: Vec<String> = service
        .projection()
        .visible
        .iter()
        .map(|p| owner_initials(&p.owner))
        .collect();
    assert_eq!(owners, ["AP", "DK", "EV", "JT", "MW", "MW", "SC", "SC"]);

    service.set_sort_by(SortBy::Updated);
    let first = service.projection().visible[0].id;
    assert_eq!(first, 6);
}

#[test]
fn lifecycle_age_boundaries() {
    let now = reference_now();
    assert_eq!(lifecycle_age(now - Duration::days(29), now), "< 1 month");
    assert_eq!(lifecycle_age(now - Duration::days(30), now), "1 month");
    assert_eq!(lifecycle_age(now - Duration::days(360), now), "1y");
    assert_eq!(lifecycle_age(now - Duration::days(400), now), "1y 1m");
}

#[test]
fn catalog_from_config_and_source_file() {
    let mut source = tempfile::NamedTempFile::new().unwrap();
    source
        .write_all(
            br#"[
                {
                    "id": 41,
                    "name": "Zebra Crossings",
                    "owner": "Ada Lovelace",
                    "is_certified_on_bi_platform": true,
                    "is_published": true,
                    "has_extracts": true,
                    "product_createdAt": "2024-01-01",
                    "product_updatedAt": "2025-02-10",
                    "createdAt": "2024-02-01",
                    "updatedAt": "2025-02-11"
                },
                {
                    "id": 42,
                    "name": "Apple Orchards",
                    "owner": "Grace Hopper",
                    "is_certified_on_bi_platform": false,
                    "is_published": true,
                    "product_createdAt": "2023-06-01",
                    "product_updatedAt": "2024-10-01",
                    "createdAt": "2023-07-01",
                    "updatedAt": "2024-10-02"
                }
            ]"#,
        )
        .unwrap();

    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        config,
        "[catalog]\nsource = \"{}\"\n\n[view]\nmode = \"table\"\n\n[clock]\nnow = \"2025-02-16\"",
        source.path().display()
    )
    .unwrap();

    let settings = Settings::new(config.path().to_str().unwrap()).unwrap();
    let service = CatalogService::from_settings(&settings).unwrap();

    let projection = service.projection();
    assert_eq!(projection.controls.view_mode, ViewMode::Table);
    let rows: Vec<i64> = projection.layout.products().iter().map(|p| p.id).collect();
    assert_eq!(rows, [41, 42]);
    assert_eq!(projection.stats.healthy, 1);

    let detail = service.select(41).unwrap();
    assert_eq!(detail.initials, "AL");
    assert_eq!(detail.badges.len(), 3);
    assert_eq!(detail.lifecycle[1].subtitle, "6d ago");
}

#[test]
fn direct_projection_matches_service() {
    let service = seeded_service();
    service.set_filter_status(FilterStatus::Certified);
    service.set_search_query("an");

    let direct = project(&seed_products().unwrap(), &service.controls(), reference_now());
    assert_eq!(*service.projection(), direct);
}
