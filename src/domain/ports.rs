use crate::core::envelope::DataResult;
use crate::domain::model::{AuditModule, Brand, DashboardMetrics};
use async_trait::async_trait;

/// Where the fixture resources live.
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn brands_path(&self) -> &str;
    fn metrics_path(&self) -> &str;
    fn modules_path(&self) -> &str;
}

/// The three read operations the dashboard is built on. View state machines
/// depend on this trait rather than the HTTP client so tests can script
/// outcomes.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_brands(&self) -> DataResult<Vec<Brand>>;
    async fn fetch_dashboard_metrics(&self, brand_id: &str) -> DataResult<DashboardMetrics>;
    async fn fetch_audit_modules(&self, brand_id: &str) -> DataResult<Vec<AuditModule>>;
}
