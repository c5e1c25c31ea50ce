// Dashboard view model handed to the browser client
use super::chart::{ChartConfiguration, ChartKind};
use super::employee::{EmployeeRecord, GridColumn};
use super::statistics::AggregateStatistics;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSelector {
    pub kind: ChartKind,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub department: String,
    pub employee_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<EmployeeRecord>,
    pub statistics: AggregateStatistics,
    pub departments: Vec<DepartmentSummary>,
    pub current_chart_kind: ChartKind,
    pub chart_selectors: Vec<ChartSelector>,
    pub chart: ChartConfiguration,
    /// RFC 3339 time of the last successful load, if any.
    pub loaded_at: Option<String>,
}

impl DashboardSnapshot {
    pub fn active_selector(&self) -> Option<ChartKind> {
        self.chart_selectors
            .iter()
            .find(|selector| selector.active)
            .map(|selector| selector.kind)
    }
}
