use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_resource_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BRANDS_PATH: &str = "/data/brands.json";
const DEFAULT_METRICS_PATH: &str = "/data/dashboard-metrics.json";
const DEFAULT_MODULES_PATH: &str = "/data/audit-modules.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub dashboard: DashboardSection,
    pub source: SourceSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub base_url: String,
    pub brands_path: Option<String>,
    pub metrics_path: Option<String>,
    pub modules_path: Option<String>,
}

impl FileConfig {
    /// Load from a TOML file, resolving omitted resource paths to the
    /// standard fixture locations.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: FileConfig = toml::from_str(&raw)?;

        let source = &mut config.source;
        source
            .brands_path
            .get_or_insert_with(|| DEFAULT_BRANDS_PATH.to_string());
        source
            .metrics_path
            .get_or_insert_with(|| DEFAULT_METRICS_PATH.to_string());
        source
            .modules_path
            .get_or_insert_with(|| DEFAULT_MODULES_PATH.to_string());

        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for FileConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn brands_path(&self) -> &str {
        self.source.brands_path.as_deref().unwrap_or(DEFAULT_BRANDS_PATH)
    }

    fn metrics_path(&self) -> &str {
        self.source
            .metrics_path
            .as_deref()
            .unwrap_or(DEFAULT_METRICS_PATH)
    }

    fn modules_path(&self) -> &str {
        self.source
            .modules_path
            .as_deref()
            .unwrap_or(DEFAULT_MODULES_PATH)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dashboard.name", &self.dashboard.name)?;
        validate_url("source.base_url", &self.source.base_url)?;
        validate_resource_path("source.brands_path", self.brands_path())?;
        validate_resource_path("source.metrics_path", self.metrics_path())?;
        validate_resource_path("source.modules_path", self.modules_path())?;
        Ok(())
    }
}
