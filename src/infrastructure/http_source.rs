// HTTP data source
use crate::application::employee_source::{decode_records, EmployeeSource};
use crate::domain::employee::EmployeeRecord;
use crate::error::DataLoadError;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, DataLoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| DataLoadError::Request {
                url: url.clone(),
                source,
            })?;

        Ok(Self { url, client })
    }

    fn request_error(&self, source: reqwest::Error) -> DataLoadError {
        DataLoadError::Request {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl EmployeeSource for HttpSource {
    async fn fetch_employee_data(&self) -> Result<Vec<EmployeeRecord>, DataLoadError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if !response.status().is_success() {
            return Err(DataLoadError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        // Decode from bytes so validation errors share the file source's path.
        let payload = response.bytes().await.map_err(|e| self.request_error(e))?;
        tracing::debug!("Fetched {} bytes from {}", payload.len(), self.url);

        decode_records(&payload)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
