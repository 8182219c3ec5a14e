//! Plain-text rendering used by the command line.

use crate::models::{CatalogStats, Product};
use crate::processor::{CatalogProjection, Layout, ProductDetail, ProductSummary};
use crate::utils::dates::short_date;
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub fn render_stats(stats: &CatalogStats) -> String {
    format!(
        "Total Products: {}\nCertified: {}/{}\nPublished: {}\nHealthy: {}\n",
        stats.total, stats.certified, stats.total, stats.published, stats.healthy
    )
}

fn summary_line(product: &Product, now: DateTime<Utc>) -> String {
    let summary = ProductSummary::new(product, now);
    let badges: Vec<&str> = summary.badges.iter().map(|b| b.label()).collect();
    format!(
        "{:>3}  {:<30} {:<3} {:<16} {:<8} {:<12} {:<10} {}",
        summary.id,
        summary.name,
        summary.initials,
        summary.owner,
        summary.health.label,
        short_date(product.product_updated_at),
        summary.age,
        badges.join(", ")
    )
}

fn render_group(out: &mut String, title: &str, products: &[Product], now: DateTime<Utc>) {
    let _ = writeln!(out, "{} ({})", title, products.len());
    for product in products {
        let _ = writeln!(out, "{}", summary_line(product, now));
    }
}

pub fn render_projection(projection: &CatalogProjection) -> String {
    let mut out = render_stats(&projection.stats);
    let _ = writeln!(
        out,
        "\nView: {}  Filter: {}  Sort: {}  Search: {:?}\n",
        projection.controls.view_mode,
        projection.controls.filter_status,
        projection.controls.sort_by,
        projection.controls.search_query
    );

    match &projection.layout {
        Layout::Grid(groups) | Layout::Expansion(groups) => {
            render_group(&mut out, "Certified", &groups.certified, projection.now);
            out.push('\n');
            render_group(&mut out, "Uncertified", &groups.uncertified, projection.now);
        }
        Layout::Table { rows } => {
            render_group(&mut out, "Products", rows, projection.now);
        }
    }

    out
}

pub fn render_detail(detail: &ProductDetail) -> String {
    let product = &detail.product;
    let mut out = String::new();

    let _ = writeln!(out, "{} (#{})", product.name, product.id);
    let _ = writeln!(out, "Owner: {} [{}]", product.owner, detail.initials);
    let _ = writeln!(out, "Health: {}", detail.health.label);
    let pills: Vec<String> = detail
        .pills
        .iter()
        .map(|p| format!("{} {}", p.icon, p.label))
        .collect();
    let _ = writeln!(out, "Status: {}", pills.join("  "));
    if product.has_extracts {
        let _ = writeln!(out, "Extracts: available");
    }
    if let Some(source) = &product.extended.source_display_name {
        let _ = writeln!(out, "Source: {}", source);
    }
    let _ = writeln!(out, "\n{}\n", product.description);

    let _ = writeln!(out, "Lifecycle");
    for entry in &detail.lifecycle {
        let _ = writeln!(
            out,
            "  {:<16} {:<12} {}",
            entry.label,
            short_date(entry.date),
            entry.subtitle
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterStatus, ViewControls, ViewMode};
    use crate::processor::project;
    use crate::seed::seed_products;
    use crate::test_support::{fixed_now, product};

    #[test]
    fn test_render_stats() {
        let stats = CatalogStats {
            total: 8,
            certified: 5,
            published: 6,
            healthy: 6,
        };
        let text = render_stats(&stats);
        assert!(text.contains("Total Products: 8"));
        assert!(text.contains("Certified: 5/8"));
        assert!(text.contains("Healthy: 6"));
    }

    #[test]
    fn test_render_grid_has_both_groups() {
        let projection = project(&seed_products().unwrap(), &ViewControls::default(), fixed_now());
        let text = render_projection(&projection);
        assert!(text.contains("Certified (5)"));
        assert!(text.contains("Uncertified (3)"));
        assert!(text.contains("Revenue Analytics Core"));
    }

    #[test]
    fn test_rows_show_last_updated() {
        let products = seed_products().unwrap();
        let line = summary_line(&products[0], fixed_now());
        assert!(line.contains("Revenue Analytics Core"));
        assert!(line.contains(&short_date(products[0].product_updated_at)));
        assert!(line.contains("8 Feb 2025"));
    }

    #[test]
    fn test_render_table_order() {
        let products = vec![
            product(1, "Zebra Feed", true, true),
            product(2, "Mango Drafts", false, false),
            product(3, "Apple Ledger", false, true),
        ];
        let controls = ViewControls {
            filter_status: FilterStatus::Published,
            view_mode: ViewMode::Table,
            ..ViewControls::default()
        };
        let text = render_projection(&project(&products, &controls, fixed_now()));

        let zebra = text.find("Zebra Feed").unwrap();
        let apple = text.find("Apple Ledger").unwrap();
        // certified rows come first even when their names sort later
        assert!(zebra < apple);
        assert!(!text.contains("Mango Drafts"));
        assert!(text.contains("Products (2)"));
    }

    #[test]
    fn test_render_detail() {
        let products = seed_products().unwrap();
        let detail = ProductDetail::new(&products[0], fixed_now());
        let text = render_detail(&detail);
        assert!(text.contains("Revenue Analytics Core (#1)"));
        assert!(text.contains("Owner: Sarah Chen [SC]"));
        assert!(text.contains("✓ Certified"));
        assert!(text.contains("8 Feb 2025"));
        assert!(text.contains("Age: 1y 3m"));
    }
}
