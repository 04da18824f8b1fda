//! Headless view-model state for the dashboard shell.
//!
//! Each controller mirrors one UI component: it owns the display state for a
//! fetched resource and applies the auto-selection policy to the shared
//! [`SelectionStore`]. Rendering stays with the shell; the controllers only
//! decide *which* of the mutually exclusive states to show.
//!
//! Responses carry a generation token. Resolving with a stale token is
//! discarded, so when fetches race, a slow earlier response can never
//! overwrite a newer one; re-issuing `refresh` is the retry action.

use crate::core::envelope::DataResult;
use crate::core::selection::SelectionStore;
use crate::domain::model::{AuditModule, Brand, DashboardMetrics};
use crate::domain::ports::DataSource;

/// The four mutually exclusive display states. A valid-but-empty list is
/// `Empty`, distinct from `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Failed(String),
    Empty,
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Token identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Debug)]
struct Remote<T> {
    state: ViewState<T>,
    generation: u64,
}

impl<T> Remote<T> {
    fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
        }
    }

    fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.state = ViewState::Loading;
        Generation(self.generation)
    }

    /// Install the resolved state unless a newer request superseded this
    /// token. The closure runs only for current tokens, so stale responses
    /// have no side effects at all.
    fn resolve_with(&mut self, token: Generation, f: impl FnOnce() -> ViewState<T>) -> bool {
        if token.0 != self.generation {
            tracing::debug!("Discarding stale response (generation {})", token.0);
            return false;
        }
        self.state = f();
        true
    }
}

fn list_state<T>(result: DataResult<Vec<T>>) -> ViewState<Vec<T>> {
    match result {
        DataResult::Loading => ViewState::Loading,
        DataResult::Failed(message) => ViewState::Failed(message),
        DataResult::Ready(items) if items.is_empty() => ViewState::Empty,
        DataResult::Ready(items) => ViewState::Ready(items),
    }
}

/// Brand list plus the auto-select-first-on-load policy.
#[derive(Debug)]
pub struct BrandPicker {
    brands: Remote<Vec<Brand>>,
}

impl BrandPicker {
    pub fn new() -> Self {
        Self {
            brands: Remote::new(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Brand>> {
        &self.brands.state
    }

    pub fn begin(&mut self) -> Generation {
        self.brands.begin()
    }

    /// Returns false when the response was stale and discarded; stale
    /// responses also never touch the selection store.
    pub fn apply(
        &mut self,
        token: Generation,
        result: DataResult<Vec<Brand>>,
        store: &SelectionStore,
    ) -> bool {
        self.brands.resolve_with(token, || {
            let state = list_state(result);
            if let ViewState::Ready(brands) = &state {
                store.auto_select_brand(brands);
            }
            state
        })
    }

    pub async fn refresh<D: DataSource + ?Sized>(&mut self, source: &D, store: &SelectionStore) {
        let token = self.begin();
        let result = source.fetch_brands().await;
        self.apply(token, result, store);
    }
}

impl Default for BrandPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-brand dashboard metrics.
#[derive(Debug)]
pub struct MetricsPanel {
    metrics: Remote<DashboardMetrics>,
}

impl MetricsPanel {
    pub fn new() -> Self {
        Self {
            metrics: Remote::new(),
        }
    }

    pub fn state(&self) -> &ViewState<DashboardMetrics> {
        &self.metrics.state
    }

    pub fn begin(&mut self) -> Generation {
        self.metrics.begin()
    }

    pub fn apply(&mut self, token: Generation, result: DataResult<DashboardMetrics>) -> bool {
        self.metrics.resolve_with(token, || match result {
            DataResult::Loading => ViewState::Loading,
            DataResult::Failed(message) => ViewState::Failed(message),
            DataResult::Ready(metrics) => ViewState::Ready(metrics),
        })
    }

    pub async fn refresh<D: DataSource + ?Sized>(&mut self, source: &D, brand_id: &str) {
        let token = self.begin();
        let result = source.fetch_dashboard_metrics(brand_id).await;
        self.apply(token, result);
    }
}

impl Default for MetricsPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Module sidebar and detail panel state for the active brand.
#[derive(Debug)]
pub struct ModuleExplorer {
    modules: Remote<Vec<AuditModule>>,
}

impl ModuleExplorer {
    pub fn new() -> Self {
        Self {
            modules: Remote::new(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<AuditModule>> {
        &self.modules.state
    }

    pub fn begin(&mut self) -> Generation {
        self.modules.begin()
    }

    pub fn apply(
        &mut self,
        token: Generation,
        result: DataResult<Vec<AuditModule>>,
        store: &SelectionStore,
    ) -> bool {
        self.modules.resolve_with(token, || {
            let state = list_state(result);
            if let ViewState::Ready(modules) = &state {
                store.auto_select_module(modules);
            }
            state
        })
    }

    pub async fn refresh<D: DataSource + ?Sized>(
        &mut self,
        source: &D,
        store: &SelectionStore,
        brand_id: &str,
    ) {
        let token = self.begin();
        let result = source.fetch_audit_modules(brand_id).await;
        self.apply(token, result, store);
    }

    /// The module the store points at, if it is in the loaded list.
    pub fn selected_module(&self, store: &SelectionStore) -> Option<&AuditModule> {
        let selected_id = store.selected_module_id()?;
        self.modules
            .state
            .data()?
            .iter()
            .find(|module| module.id == selected_id)
    }
}

impl Default for ModuleExplorer {
    fn default() -> Self {
        Self::new()
    }
}
