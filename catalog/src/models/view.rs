// view.rs
use chrono::{DateTime, Utc};
use common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterStatus {
    #[default]
    All,
    Certified,
    Published,
    Draft,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,
    Updated,
    Owner,
}

/// Exclusive layout choice. Any mode can switch to any other.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Expansion,
    Table,
}

impl FilterStatus {
    pub const ALL: [FilterStatus; 4] = [
        FilterStatus::All,
        FilterStatus::Certified,
        FilterStatus::Published,
        FilterStatus::Draft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterStatus::All => "all",
            FilterStatus::Certified => "certified",
            FilterStatus::Published => "published",
            FilterStatus::Draft => "draft",
        }
    }
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Updated => "updated",
            SortBy::Owner => "owner",
        }
    }
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Expansion => "expansion",
            ViewMode::Table => "table",
        }
    }
}

impl FromStr for FilterStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterStatus::All),
            "certified" => Ok(FilterStatus::Certified),
            "published" => Ok(FilterStatus::Published),
            "draft" | "drafts" => Ok(FilterStatus::Draft),
            other => Err(Error::InvalidInput(format!("Unknown filter status: {}", other))),
        }
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortBy::Name),
            "updated" => Ok(SortBy::Updated),
            "owner" => Ok(SortBy::Owner),
            other => Err(Error::InvalidInput(format!("Unknown sort key: {}", other))),
        }
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "expansion" => Ok(ViewMode::Expansion),
            "table" => Ok(ViewMode::Table),
            other => Err(Error::InvalidInput(format!("Unknown view mode: {}", other))),
        }
    }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Transient toolbar state owned by the catalog screen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
pub struct ViewControls {
    pub search_query: String,
    pub filter_status: FilterStatus,
    pub sort_by: SortBy,
    pub view_mode: ViewMode,
}

impl ViewControls {
    pub fn from_settings(view: &common::config::ViewConfig) -> Result<Self> {
        Ok(Self {
            search_query: view.search.clone(),
            filter_status: view.filter.parse()?,
            sort_by: view.sort.parse()?,
            view_mode: view.mode.parse()?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthLabel {
    Healthy,
    Stable,
    Stale,
}

impl HealthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Healthy => "Healthy",
            HealthLabel::Stable => "Stable",
            HealthLabel::Stale => "Stale",
        }
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Freshness classification with its display colors.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub label: HealthLabel,
    pub color: &'static str,
    #[serde(rename = "bgColor")]
    pub bg_color: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LifecycleEntry {
    pub label: String,
    pub date: DateTime<Utc>,
    pub subtitle: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub certified: usize,
    pub published: usize,
    pub healthy: usize,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Certified,
    Uncertified,
    Published,
    Draft,
    Extract,
}

impl BadgeVariant {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeVariant::Certified => "Certified",
            BadgeVariant::Uncertified => "Uncertified",
            BadgeVariant::Published => "Published",
            BadgeVariant::Draft => "Draft",
            BadgeVariant::Extract => "Extract",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BadgeVariant::Certified => "verified",
            BadgeVariant::Uncertified => "gpp_maybe",
            BadgeVariant::Published => "circle",
            BadgeVariant::Draft => "edit_note",
            BadgeVariant::Extract => "downloading",
        }
    }
}

/// On/off indicator shown in expansion-list headers.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct StatusPill {
    pub active: bool,
    pub label: &'static str,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_values_parse() {
        assert_eq!("certified".parse::<FilterStatus>().unwrap(), FilterStatus::Certified);
        assert_eq!("Drafts".parse::<FilterStatus>().unwrap(), FilterStatus::Draft);
        assert_eq!("updated".parse::<SortBy>().unwrap(), SortBy::Updated);
        assert_eq!(" table ".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert!("archived".parse::<FilterStatus>().is_err());
        assert!("size".parse::<SortBy>().is_err());
        assert!("kanban".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_controls_from_settings() {
        let view = common::config::ViewConfig {
            search: "revenue".to_string(),
            filter: "published".to_string(),
            sort: "owner".to_string(),
            mode: "expansion".to_string(),
        };
        let controls = ViewControls::from_settings(&view).unwrap();
        assert_eq!(controls.search_query, "revenue");
        assert_eq!(controls.filter_status, FilterStatus::Published);
        assert_eq!(controls.sort_by, SortBy::Owner);
        assert_eq!(controls.view_mode, ViewMode::Expansion);
    }

    #[test]
    fn test_default_controls() {
        let controls = ViewControls::default();
        assert!(controls.search_query.is_empty());
        assert_eq!(controls.filter_status, FilterStatus::All);
        assert_eq!(controls.sort_by, SortBy::Name);
        assert_eq!(controls.view_mode, ViewMode::Grid);
    }
}
