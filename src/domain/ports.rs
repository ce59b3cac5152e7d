use crate::domain::model::{OutputDocument, Summary};
use crate::utils::error::Result;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    /// Payload produced by `extract` and consumed by `transform`.
    type Raw;

    fn extract(&self) -> Result<Self::Raw>;
    fn transform(&self, raw: Self::Raw) -> Result<Vec<OutputDocument>>;
    fn load(&self, documents: Vec<OutputDocument>) -> Result<Summary>;
}
