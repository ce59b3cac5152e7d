pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::ConvertEngine, osquery::OsqueryPipeline, sqlfile::SqlPipeline};
pub use crate::domain::model::{OutputDocument, QueryRecord, Summary};
pub use crate::utils::error::{ConvertError, Result};
