// display.rs
use crate::models::{BadgeVariant, Product, StatusPill};
use crate::utils::text::truncate_chars;

/// Descriptions longer than this get a hover tooltip.
const TOOLTIP_THRESHOLD_CHARS: usize = 120;
const TOOLTIP_MAX_CHARS: usize = 200;

/// First character of every whitespace-separated token, in order.
///
/// Different owners may share initials; this is only an avatar label.
pub fn owner_initials(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

pub fn certification_badge(product: &Product) -> BadgeVariant {
    if product.is_certified_on_bi_platform {
        BadgeVariant::Certified
    } else {
        BadgeVariant::Uncertified
    }
}

pub fn publication_badge(product: &Product) -> BadgeVariant {
    if product.is_published {
        BadgeVariant::Published
    } else {
        BadgeVariant::Draft
    }
}

/// Certification, publication, then Extract when the product has extracts.
pub fn badges(product: &Product) -> Vec<BadgeVariant> {
    let mut badges = vec![certification_badge(product), publication_badge(product)];
    if product.has_extracts {
        badges.push(BadgeVariant::Extract);
    }
    badges
}

pub fn status_pills(product: &Product) -> [StatusPill; 2] {
    let certified = product.is_certified_on_bi_platform;
    let published = product.is_published;
    [
        StatusPill {
            active: certified,
            label: if certified { "Certified" } else { "Uncertified" },
            icon: if certified { "✓" } else { "○" },
        },
        StatusPill {
            active: published,
            label: if published { "Published" } else { "Draft" },
            icon: if published { "◉" } else { "◌" },
        },
    ]
}

pub fn description_tooltip(product: &Product) -> Option<String> {
    if product.description.chars().count() > TOOLTIP_THRESHOLD_CHARS {
        Some(format!(
            "{}...",
            truncate_chars(&product.description, TOOLTIP_MAX_CHARS)
        ))
    } else {
        None
    }
}
