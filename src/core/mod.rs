pub mod emit;
pub mod engine;
pub mod osquery;
pub mod sqlfile;

pub use crate::domain::model::{OutputDocument, QueryRecord, Summary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
