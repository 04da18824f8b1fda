pub mod data_service;
pub mod envelope;
pub mod selection;
pub mod view;

pub use crate::domain::model::{AuditModule, Brand, DashboardMetrics};
pub use crate::domain::ports::{ConfigProvider, DataSource};
pub use crate::utils::error::Result;
