//! One-way migration for the pre-1.0 module fixture shape.
//!
//! Early fixtures carried `summary`/`scoreLabel` with a bare 0-100 score
//! value and no per-module findings. The data layer only decodes the
//! canonical [`AuditModule`] shape; this conversion exists for migrating old
//! fixture files, not for dual-support at runtime.

use serde::Deserialize;

use crate::domain::model::{AuditModule, Score};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAuditModule {
    pub id: String,
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub score_label: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl LegacyAuditModule {
    pub fn into_canonical(self) -> AuditModule {
        AuditModule {
            id: self.id,
            name: self.name,
            description: None,
            icon: None,
            score: Score {
                value: self.score,
                max_value: 100.0,
                trend: None,
                change_percentage: None,
            },
            score_label: self.score_label,
            summary: self.summary,
            insights: Vec::new(),
            issues: Vec::new(),
            recommendations: Vec::new(),
            last_updated: None,
        }
    }
}
