use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|source| ConvertError::InputError {
            path: path.to_string(),
            source,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConvertError::WriteError {
                    path: path.to_string(),
                    source,
                })?;
            }
        }

        fs::write(path, data).map_err(|source| ConvertError::WriteError {
            path: path.to_string(),
            source,
        })
    }
}
