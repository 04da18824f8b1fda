//! Uniform wrapper for asynchronous fetch outcomes.
//!
//! Every data-access operation resolves to a `DataResult` instead of
//! returning `Err` across the boundary, so consumers branch on
//! loading / error / data with one match and never handle exceptions.

use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum DataResult<T> {
    /// Request is still in flight.
    Loading,
    /// Completed with data; `error()` is `None`.
    Ready(T),
    /// Completed with a human-readable failure; `data()` is `None`.
    Failed(String),
}

impl<T> DataResult<T> {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataResult<U> {
        match self {
            Self::Loading => DataResult::Loading,
            Self::Ready(data) => DataResult::Ready(f(data)),
            Self::Failed(message) => DataResult::Failed(message),
        }
    }

}

impl<T> From<Result<T>> for DataResult<T> {
    fn from(outcome: Result<T>) -> Self {
        match outcome {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}
