pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FileConfig;

pub use crate::core::data_service::DataService;
pub use crate::core::envelope::DataResult;
pub use crate::core::selection::{Selection, SelectionStore};
pub use crate::core::view::{BrandPicker, MetricsPanel, ModuleExplorer, ViewState};
pub use domain::ports::{ConfigProvider, DataSource};
pub use utils::error::{DashError, Result};
