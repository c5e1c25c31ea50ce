// Data source trait for employee records
use crate::domain::employee::EmployeeRecord;
use crate::error::DataLoadError;
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetch the full list of employee records. One read per call, no retry.
    async fn fetch_employee_data(&self) -> Result<Vec<EmployeeRecord>, DataLoadError>;

    /// Where the records come from, for log messages
    fn describe(&self) -> String;
}

/// Decode a JSON array of employee records and validate each one.
pub fn decode_records(payload: &[u8]) -> Result<Vec<EmployeeRecord>, DataLoadError> {
    let records: Vec<EmployeeRecord> = serde_json::from_slice(payload)?;

    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|reason| DataLoadError::InvalidRecord { index, reason })?;
    }

    Ok(records)
}
