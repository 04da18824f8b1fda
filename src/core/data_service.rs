//! Data Access Layer over the static fixture endpoints.
//!
//! Owns no state beyond the HTTP client. Every public operation resolves to
//! a [`DataResult`] envelope; failures are logged and converted at this
//! boundary, never propagated as errors to consumers. Calls are idempotent
//! and safe to race (consumers keep the last resolved response, see
//! `core::view`).

use crate::core::envelope::DataResult;
use crate::domain::model::{AuditModule, Brand, DashboardMetrics};
use crate::domain::ports::{ConfigProvider, DataSource};
use crate::utils::error::{DashError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub struct DataService<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> DataService<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.url_for(path);
        tracing::debug!("Fetching fixture: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Fixture response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(DashError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DashError::Http {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    fn envelope<T>(path: &str, outcome: Result<T>) -> DataResult<T> {
        if let Err(err) = &outcome {
            tracing::error!("Error fetching {}: {}", path, err);
        }
        outcome.into()
    }

    async fn load_brands(&self) -> Result<Vec<Brand>> {
        let payload = self.fetch_json(self.config.brands_path()).await?;
        let brands: Vec<Brand> = serde_json::from_value(payload)
            .map_err(|_| DashError::validation("Data validation failed"))?;
        if brands.is_empty() {
            return Err(DashError::validation("Data validation failed"));
        }
        Ok(brands)
    }

    async fn load_metrics(&self, brand_id: &str) -> Result<DashboardMetrics> {
        let payload = self.fetch_json(self.config.metrics_path()).await?;
        let entry = payload.get(brand_id).cloned().ok_or_else(|| {
            DashError::validation(format!("No metrics found for brand: {}", brand_id))
        })?;
        serde_json::from_value(entry)
            .map_err(|_| DashError::validation("Invalid metrics data structure"))
    }

    async fn load_modules(&self, brand_id: &str) -> Result<Vec<AuditModule>> {
        let payload = self.fetch_json(self.config.modules_path()).await?;
        let items = match payload.get(brand_id).and_then(|entry| entry.as_array()) {
            Some(items) => items.clone(),
            None => {
                return Err(DashError::validation(format!(
                    "No audit modules found for brand: {}",
                    brand_id
                )))
            }
        };

        // Zero modules for a known brand is valid data, not an error.
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // All-or-nothing: one malformed element fails the whole list.
        serde_json::from_value(serde_json::Value::Array(items))
            .map_err(|_| DashError::validation("Invalid audit module data structure"))
    }
}

#[async_trait]
impl<C: ConfigProvider> DataSource for DataService<C> {
    async fn fetch_brands(&self) -> DataResult<Vec<Brand>> {
        Self::envelope(self.config.brands_path(), self.load_brands().await)
    }

    async fn fetch_dashboard_metrics(&self, brand_id: &str) -> DataResult<DashboardMetrics> {
        if brand_id.is_empty() {
            return DataResult::failed("Brand ID is required");
        }
        Self::envelope(self.config.metrics_path(), self.load_metrics(brand_id).await)
    }

    async fn fetch_audit_modules(&self, brand_id: &str) -> DataResult<Vec<AuditModule>> {
        if brand_id.is_empty() {
            return DataResult::failed("Brand ID is required");
        }
        Self::envelope(self.config.modules_path(), self.load_modules(brand_id).await)
    }
}
