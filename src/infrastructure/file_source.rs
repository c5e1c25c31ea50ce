// JSON file data source
use crate::application::employee_source::{decode_records, EmployeeSource};
use crate::domain::employee::EmployeeRecord;
use crate::error::DataLoadError;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EmployeeSource for JsonFileSource {
    async fn fetch_employee_data(&self) -> Result<Vec<EmployeeRecord>, DataLoadError> {
        let payload = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DataLoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        decode_records(&payload)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
