use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_resource_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "aiseo-dash")]
#[command(about = "Terminal dashboard for AI-SEO audit fixture data")]
pub struct CliConfig {
    /// Base URL of the server hosting the fixture JSON files
    #[arg(long, default_value = "http://localhost:3000")]
    pub base_url: String,

    #[arg(long, default_value = "/data/brands.json")]
    pub brands_path: String,

    #[arg(long, default_value = "/data/dashboard-metrics.json")]
    pub metrics_path: String,

    #[arg(long, default_value = "/data/audit-modules.json")]
    pub modules_path: String,

    /// TOML config file; overrides the URL flags when given
    #[arg(long)]
    pub config: Option<String>,

    /// Brand id to inspect (defaults to the first brand in the list)
    #[arg(long)]
    pub brand: Option<String>,

    /// Audit module id to expand (defaults to the first module)
    #[arg(long)]
    pub module: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn brands_path(&self) -> &str {
        &self.brands_path
    }

    fn metrics_path(&self) -> &str {
        &self.metrics_path
    }

    fn modules_path(&self) -> &str {
        &self.modules_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_resource_path("brands_path", &self.brands_path)?;
        validate_resource_path("metrics_path", &self.metrics_path)?;
        validate_resource_path("modules_path", &self.modules_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_the_fixture_endpoints() {
        let config = CliConfig::parse_from(["aiseo-dash"]);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.brands_path, "/data/brands.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_relative_resource_path_is_rejected() {
        let config = CliConfig::parse_from(["aiseo-dash", "--brands-path", "brands.json"]);
        assert!(config.validate().is_err());
    }
}
