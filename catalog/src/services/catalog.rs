use crate::models::{CatalogStats, FilterStatus, Product, SortBy, ViewControls, ViewMode};
use crate::processor::{CatalogProjection, ProductDetail, ProjectionCache};
use crate::seed::seed_products;
use crate::store::{CatalogStore, ingest};
use crate::utils::dates::parse_instant;
use chrono::{DateTime, Utc};
use common::config::Settings;
use common::{Error, Result};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::{debug, info};

/// Source of the reference instant used by every date projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(now) => *now,
        }
    }

    pub fn from_setting(value: Option<&str>) -> Result<Self> {
        match value {
            Some(raw) => Ok(Clock::Fixed(parse_instant("clock.now", raw)?)),
            None => Ok(Clock::System),
        }
    }
}

type Listener = Arc<dyn Fn(&CatalogProjection) + Send + Sync>;

/// Catalog screen state: the store, the toolbar controls, the selected
/// product and the memoized projections derived from them.
///
/// Every control or snapshot change recomputes the projection once and hands
/// it to subscribers.
pub struct CatalogService {
    store: CatalogStore,
    controls: RwLock<ViewControls>,
    selected: RwLock<Option<i64>>,
    cache: ProjectionCache,
    clock: Clock,
    listeners: Mutex<Vec<Listener>>,
}

impl CatalogService {
    pub fn new(store: CatalogStore, controls: ViewControls, clock: Clock) -> Self {
        Self {
            store,
            controls: RwLock::new(controls),
            selected: RwLock::new(None),
            cache: ProjectionCache::new(),
            clock,
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let products = match settings.catalog.source.as_deref() {
            Some(path) => {
                info!(path, "Loading catalog from source file");
                ingest::load_records(path)?
            }
            None => {
                info!("Loading built-in seed catalog");
                seed_products()?
            }
        };

        let store = CatalogStore::new(products)?;
        let controls = ViewControls::from_settings(&settings.view)?;
        let clock = Clock::from_setting(settings.clock.now.as_deref())?;

        Ok(Self::new(store, controls, clock))
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn controls(&self) -> ViewControls {
        self.controls.read().clone()
    }

    pub fn projection(&self) -> Arc<CatalogProjection> {
        let controls = self.controls();
        self.cache
            .projection(&self.store.snapshot(), &controls, self.clock.now())
    }

    pub fn stats(&self) -> CatalogStats {
        self.cache.stats(&self.store.snapshot(), self.clock.now())
    }

    pub fn cache(&self) -> &ProjectionCache {
        &self.cache
    }

    /// Registers a callback run with the fresh projection after each change.
    /// Callbacks may change controls; that publishes a nested notification.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&CatalogProjection) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(listener));
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update_controls(|c| c.search_query = query);
    }

    pub fn set_filter_status(&self, status: FilterStatus) {
        self.update_controls(|c| c.filter_status = status);
    }

    pub fn set_sort_by(&self, sort_by: SortBy) {
        self.update_controls(|c| c.sort_by = sort_by);
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.update_controls(|c| c.view_mode = mode);
    }

    pub fn update_controls<F>(&self, apply: F)
    where
        F: FnOnce(&mut ViewControls),
    {
        let changed = {
            let mut controls = self.controls.write();
            let before = controls.clone();
            apply(&mut controls);
            *controls != before
        };

        if changed {
            debug!(controls = ?self.controls(), "View controls changed");
            self.notify();
        }
    }

    /// Publishes a new product collection and drops a selection that no
    /// longer exists.
    pub fn replace_products(&self, products: Vec<Product>) -> Result<u64> {
        let version = self.store.replace(products)?;

        let mut selected = self.selected.write();
        if let Some(id) = *selected {
            if self.store.get(id).is_none() {
                debug!(id, "Clearing selection removed by snapshot replace");
                *selected = None;
            }
        }
        drop(selected);

        self.notify();
        Ok(version)
    }

    pub fn detail(&self, id: i64) -> Result<ProductDetail> {
        let snapshot = self.store.snapshot();
        let product = snapshot.get(id).ok_or(Error::ProductNotFound(id))?;
        Ok(ProductDetail::new(product, self.clock.now()))
    }

    pub fn select(&self, id: i64) -> Result<ProductDetail> {
        let detail = self.detail(id)?;
        *self.selected.write() = Some(id);
        Ok(detail)
    }

    pub fn clear_selection(&self) {
        *self.selected.write() = None;
    }

    pub fn selected(&self) -> Option<ProductDetail> {
        let id = (*self.selected.read())?;
        self.detail(id).ok()
    }

    fn notify(&self) {
        // released before listeners run so they can call back into the service
        let listeners: Vec<Listener> = self.listeners.lock().clone();
        if listeners.is_empty() {
            return;
        }
        let projection = self.projection();
        for listener in listeners.iter() {
            listener(&projection);
        }
    }
}
