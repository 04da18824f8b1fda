//! Static registry of the audit dimensions the product ships with.
//!
//! Fixture data decides which modules a brand actually has; this table only
//! supplies display ordering and category grouping for shells.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleCategory {
    Visibility,
    Trust,
    Content,
    Competitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ModuleCategory,
    pub order: u32,
}

pub const AUDIT_MODULES: [ModuleDescriptor; 7] = [
    ModuleDescriptor {
        id: "brand-visibility",
        name: "Brand Visibility",
        category: ModuleCategory::Visibility,
        order: 1,
    },
    ModuleDescriptor {
        id: "trust-authority",
        name: "Trust & Authority",
        category: ModuleCategory::Trust,
        order: 2,
    },
    ModuleDescriptor {
        id: "content-representation",
        name: "Content Representation",
        category: ModuleCategory::Content,
        order: 3,
    },
    ModuleDescriptor {
        id: "keyword-coverage",
        name: "Keyword Coverage",
        category: ModuleCategory::Visibility,
        order: 4,
    },
    ModuleDescriptor {
        id: "sentiment-positioning",
        name: "Sentiment & Positioning",
        category: ModuleCategory::Content,
        order: 5,
    },
    ModuleDescriptor {
        id: "source-diversity",
        name: "Source Diversity",
        category: ModuleCategory::Trust,
        order: 6,
    },
    ModuleDescriptor {
        id: "competitive-context",
        name: "Competitive Context",
        category: ModuleCategory::Competitive,
        order: 7,
    },
];

/// All known module ids in display order.
pub fn module_ids() -> Vec<&'static str> {
    let mut modules: Vec<&ModuleDescriptor> = AUDIT_MODULES.iter().collect();
    modules.sort_by_key(|m| m.order);
    modules.into_iter().map(|m| m.id).collect()
}

pub fn descriptor(id: &str) -> Option<&'static ModuleDescriptor> {
    AUDIT_MODULES.iter().find(|m| m.id == id)
}

pub fn in_category(category: ModuleCategory) -> Vec<&'static ModuleDescriptor> {
    let mut modules: Vec<&ModuleDescriptor> = AUDIT_MODULES
        .iter()
        .filter(|m| m.category == category)
        .collect();
    modules.sort_by_key(|m| m.order);
    modules
}

/// Display rank for a module id; unknown ids sort after registered ones.
pub fn display_rank(id: &str) -> u32 {
    descriptor(id).map(|m| m.order).unwrap_or(u32::MAX)
}
