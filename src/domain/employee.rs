// Employee task record domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeRecord {
    pub employee: String,
    pub department: String,
    pub tasks_completed: u32,
    pub tasks_pending: u32,
}

impl EmployeeRecord {
    pub fn new(
        employee: impl Into<String>,
        department: impl Into<String>,
        tasks_completed: u32,
        tasks_pending: u32,
    ) -> Self {
        Self {
            employee: employee.into(),
            department: department.into(),
            tasks_completed,
            tasks_pending,
        }
    }

    /// Check the invariants serde cannot express. Counts are unsigned already.
    pub fn validate(&self) -> Result<(), String> {
        if self.employee.trim().is_empty() {
            return Err("employee must not be empty".to_string());
        }
        if self.department.trim().is_empty() {
            return Err(format!("department of {} must not be empty", self.employee));
        }
        Ok(())
    }
}

/// The fields of an [`EmployeeRecord`] a chart series can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Employee,
    Department,
    TasksCompleted,
    TasksPending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Count(u32),
}

impl RecordField {
    pub fn value_of<'a>(&self, record: &'a EmployeeRecord) -> FieldValue<'a> {
        match self {
            RecordField::Employee => FieldValue::Text(&record.employee),
            RecordField::Department => FieldValue::Text(&record.department),
            RecordField::TasksCompleted => FieldValue::Count(record.tasks_completed),
            RecordField::TasksPending => FieldValue::Count(record.tasks_pending),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            RecordField::Employee => "employee",
            RecordField::Department => "department",
            RecordField::TasksCompleted => "tasksCompleted",
            RecordField::TasksPending => "tasksPending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub field: RecordField,
    pub header_name: &'static str,
}

/// Column definitions for the employee grid, in display order.
pub fn grid_columns() -> Vec<GridColumn> {
    vec![
        GridColumn { field: RecordField::Employee, header_name: "Employee" },
        GridColumn { field: RecordField::Department, header_name: "Department" },
        GridColumn { field: RecordField::TasksCompleted, header_name: "Tasks Completed" },
        GridColumn { field: RecordField::TasksPending, header_name: "Tasks Pending" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"employee":"Ana","department":"Ops","tasksCompleted":3,"tasksPending":1}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, EmployeeRecord::new("Ana", "Ops", 3, 1));
    }

    #[test]
    fn test_rejects_negative_and_unknown_fields() {
        let negative = r#"{"employee":"Ana","department":"Ops","tasksCompleted":-1,"tasksPending":1}"#;
        assert!(serde_json::from_str::<EmployeeRecord>(negative).is_err());

        let typo = r#"{"employee":"Ana","department":"Ops","taskCompleted":1,"tasksPending":1}"#;
        assert!(serde_json::from_str::<EmployeeRecord>(typo).is_err());
    }

    #[test]
    fn test_validate_empty_names() {
        assert!(EmployeeRecord::new("Ana", "Ops", 0, 0).validate().is_ok());
        assert!(EmployeeRecord::new("  ", "Ops", 0, 0).validate().is_err());
        assert!(EmployeeRecord::new("Ana", "", 0, 0).validate().is_err());
    }

    #[test]
    fn test_field_values() {
        let record = EmployeeRecord::new("Ana", "Ops", 3, 1);
        assert_eq!(RecordField::Employee.value_of(&record), FieldValue::Text("Ana"));
        assert_eq!(RecordField::TasksPending.value_of(&record), FieldValue::Count(1));
    }

    #[test]
    fn test_grid_columns_match_wire_names() {
        let columns = serde_json::to_value(grid_columns()).unwrap();
        assert_eq!(columns[2]["field"], "tasksCompleted");
        assert_eq!(columns[2]["headerName"], "Tasks Completed");
        for column in grid_columns() {
            assert_eq!(serde_json::to_value(column.field).unwrap(), column.field.wire_name());
        }
    }
}
