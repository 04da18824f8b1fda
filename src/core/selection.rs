//! Session-lived selection state shared by all dashboard components.
//!
//! The store is an explicit value the caller owns and injects (typically
//! behind an `Arc`), not a process-wide singleton. Components subscribe for
//! change notifications through a watch channel; setters are synchronous
//! single-field replacements and never validate that the brand or module id
//! exists in a loaded list — that stays with the loaders (see auto-selection
//! below).

use crate::domain::model::{AuditModule, Brand};
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub brand: Option<Brand>,
    pub module_id: Option<String>,
}

#[derive(Debug)]
pub struct SelectionStore {
    tx: watch::Sender<Selection>,
}

impl SelectionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Selection::default());
        Self { tx }
    }

    /// Receiver that observes every selection change.
    pub fn subscribe(&self) -> watch::Receiver<Selection> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Selection {
        self.tx.borrow().clone()
    }

    pub fn selected_brand(&self) -> Option<Brand> {
        self.tx.borrow().brand.clone()
    }

    pub fn selected_module_id(&self) -> Option<String> {
        self.tx.borrow().module_id.clone()
    }

    pub fn set_selected_brand(&self, brand: Option<Brand>) {
        self.tx.send_modify(|selection| selection.brand = brand);
    }

    pub fn set_selected_module_id(&self, module_id: Option<String>) {
        self.tx.send_modify(|selection| selection.module_id = module_id);
    }

    /// Select the first brand of a freshly loaded list, only when nothing is
    /// selected yet. Never overrides an existing selection, so re-applying
    /// the same list (or a reshaped one) is a no-op.
    pub fn auto_select_brand(&self, brands: &[Brand]) {
        let Some(first) = brands.first() else {
            return;
        };
        self.tx.send_if_modified(|selection| {
            if selection.brand.is_some() {
                return false;
            }
            tracing::debug!("Auto-selecting brand: {}", first.id);
            selection.brand = Some(first.clone());
            true
        });
    }

    /// Module counterpart of [`auto_select_brand`](Self::auto_select_brand).
    pub fn auto_select_module(&self, modules: &[AuditModule]) {
        let Some(first) = modules.first() else {
            return;
        };
        self.tx.send_if_modified(|selection| {
            if selection.module_id.is_some() {
                return false;
            }
            tracing::debug!("Auto-selecting module: {}", first.id);
            selection.module_id = Some(first.id.clone());
            true
        });
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn brand(id: &str) -> Brand {
        Brand {
            id: id.to_string(),
            name: id.to_uppercase(),
            domain: format!("{}.com", id),
            industry: "retail".to_string(),
            last_audit_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_setters_replace_single_fields() {
        let store = SelectionStore::new();
        store.set_selected_brand(Some(brand("acme")));
        store.set_selected_module_id(Some("brand-visibility".to_string()));

        assert_eq!(store.selected_brand().unwrap().id, "acme");
        assert_eq!(
            store.selected_module_id().as_deref(),
            Some("brand-visibility")
        );

        // Replacing the brand does not touch the module selection.
        store.set_selected_brand(Some(brand("globex")));
        assert_eq!(store.selected_brand().unwrap().id, "globex");
        assert_eq!(
            store.selected_module_id().as_deref(),
            Some("brand-visibility")
        );

        store.set_selected_brand(None);
        assert_eq!(store.selected_brand(), None);
    }

    #[test]
    fn test_auto_select_brand_picks_first_only_when_unset() {
        let store = SelectionStore::new();
        let brands = vec![brand("acme"), brand("globex")];

        store.auto_select_brand(&brands);
        assert_eq!(store.selected_brand().unwrap().id, "acme");

        // Re-applying the same load must not change the selection.
        store.auto_select_brand(&brands);
        assert_eq!(store.selected_brand().unwrap().id, "acme");

        // Nor may a reshaped list override a user choice.
        store.set_selected_brand(Some(brand("globex")));
        store.auto_select_brand(&[brand("initech"), brand("acme")]);
        assert_eq!(store.selected_brand().unwrap().id, "globex");
    }

    #[test]
    fn test_auto_select_with_empty_list_is_a_no_op() {
        let store = SelectionStore::new();
        store.auto_select_brand(&[]);
        assert_eq!(store.selected_brand(), None);
        store.auto_select_module(&[]);
        assert_eq!(store.selected_module_id(), None);
    }

    #[test]
    fn test_subscribers_observe_changes() {
        let store = SelectionStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_selected_brand(Some(brand("acme")));
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().brand.as_ref().unwrap().id,
            "acme"
        );

        // Idempotent auto-selection does not wake subscribers.
        store.auto_select_brand(&[brand("globex")]);
        assert!(!rx.has_changed().unwrap());
    }
}
