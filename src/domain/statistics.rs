// Aggregate statistics over employee records
use super::employee::EmployeeRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub fn total_tasks_completed(records: &[EmployeeRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.tasks_completed)).sum()
}

pub fn total_tasks_pending(records: &[EmployeeRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.tasks_pending)).sum()
}

/// Records grouped by department. Departments keep first-occurrence order and
/// records keep input order within a department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentGroups {
    groups: Vec<(String, Vec<EmployeeRecord>)>,
}

impl DepartmentGroups {
    pub fn get(&self, department: &str) -> Option<&[EmployeeRecord]> {
        self.groups
            .iter()
            .find(|(name, _)| name == department)
            .map(|(_, records)| records.as_slice())
    }

    pub fn department_names(&self) -> Vec<&str> {
        self.groups.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn employee_count(&self, department: &str) -> usize {
        self.get(department).map(|records| records.len()).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EmployeeRecord])> {
        self.groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// Serialized as a JSON object whose key order follows the groups.
impl Serialize for DepartmentGroups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, records) in &self.groups {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

pub fn group_by_department(records: &[EmployeeRecord]) -> DepartmentGroups {
    let mut groups: Vec<(String, Vec<EmployeeRecord>)> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|(name, _)| *name == record.department) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((record.department.clone(), vec![record.clone()])),
        }
    }

    DepartmentGroups { groups }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatistics {
    pub total_completed: u64,
    pub total_pending: u64,
    pub by_department: DepartmentGroups,
}

impl AggregateStatistics {
    pub fn compute(records: &[EmployeeRecord]) -> Self {
        Self {
            total_completed: total_tasks_completed(records),
            total_pending: total_tasks_pending(records),
            by_department: group_by_department(records),
        }
    }
}
