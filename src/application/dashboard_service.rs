// Dashboard service - View state and the load/select use cases
use crate::application::chart_builder::build_chart_config;
use crate::application::employee_source::EmployeeSource;
use crate::domain::chart::{ChartConfiguration, ChartKind};
use crate::domain::dashboard::{ChartSelector, DashboardSnapshot, DepartmentSummary};
use crate::domain::employee::{grid_columns, EmployeeRecord};
use crate::domain::statistics::AggregateStatistics;
use crate::error::DataLoadError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The state behind one dashboard session.
///
/// Statistics and the chart configuration are derived from `records` and
/// rebuilt whenever the records or the selected kind change.
#[derive(Debug, Clone)]
pub struct DashboardView {
    records: Vec<EmployeeRecord>,
    current_chart_kind: ChartKind,
    statistics: AggregateStatistics,
    chart: ChartConfiguration,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        let current_chart_kind = ChartKind::default();
        Self {
            records: Vec::new(),
            current_chart_kind,
            statistics: AggregateStatistics::default(),
            chart: build_chart_config(current_chart_kind, &[]),
            loaded_at: None,
        }
    }

    pub fn replace_records(&mut self, records: Vec<EmployeeRecord>) {
        self.records = records;
        self.statistics = AggregateStatistics::compute(&self.records);
        self.chart = build_chart_config(self.current_chart_kind, &self.records);
        self.loaded_at = Some(Utc::now());
    }

    pub fn select_chart(&mut self, kind: ChartKind) -> &ChartConfiguration {
        self.current_chart_kind = kind;
        self.chart = build_chart_config(kind, &self.records);
        &self.chart
    }

    pub fn is_active_chart(&self, kind: ChartKind) -> bool {
        self.current_chart_kind == kind
    }

    pub fn current_chart_kind(&self) -> ChartKind {
        self.current_chart_kind
    }

    pub fn chart(&self) -> &ChartConfiguration {
        &self.chart
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn statistics(&self) -> &AggregateStatistics {
        &self.statistics
    }

    pub fn department_names(&self) -> Vec<&str> {
        self.statistics.by_department.department_names()
    }

    pub fn employee_count_by_department(&self, department: &str) -> usize {
        self.statistics.by_department.employee_count(department)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let departments = self
            .statistics
            .by_department
            .iter()
            .map(|(department, members)| DepartmentSummary {
                department: department.to_string(),
                employee_count: members.len(),
            })
            .collect();

        let chart_selectors = ChartKind::ALL
            .into_iter()
            .map(|kind| ChartSelector {
                kind,
                active: self.is_active_chart(kind),
            })
            .collect();

        DashboardSnapshot {
            columns: grid_columns(),
            rows: self.records.clone(),
            statistics: self.statistics.clone(),
            departments,
            current_chart_kind: self.current_chart_kind,
            chart_selectors,
            chart: self.chart.clone(),
            loaded_at: self.loaded_at.map(|at| at.to_rfc3339()),
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn EmployeeSource>,
    view: Arc<RwLock<DashboardView>>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn EmployeeSource>) -> Self {
        Self {
            source,
            view: Arc::new(RwLock::new(DashboardView::new())),
        }
    }

    /// Fetch the records once and rebuild the view from them.
    ///
    /// A failed fetch is logged and leaves the view as it was (empty on
    /// startup). No placeholder data is substituted.
    pub async fn load(&self) -> Result<usize, DataLoadError> {
        tracing::info!("Loading employee data from {}", self.source.describe());

        match self.source.fetch_employee_data().await {
            Ok(records) => {
                let count = records.len();
                self.view.write().await.replace_records(records);
                tracing::info!("Loaded {} employee records", count);
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Error loading employee data: {}", e);
                Err(e)
            }
        }
    }

    pub async fn select_chart(&self, kind: ChartKind) -> ChartConfiguration {
        let mut view = self.view.write().await;
        tracing::debug!("Switching chart from {} to {}", view.current_chart_kind(), kind);
        view.select_chart(kind).clone()
    }

    /// Build a chart over the current records without changing the selection.
    pub async fn preview_chart(&self, kind: ChartKind) -> ChartConfiguration {
        let view = self.view.read().await;
        build_chart_config(kind, view.records())
    }

    pub async fn active_chart(&self) -> ChartConfiguration {
        self.view.read().await.chart().clone()
    }

    pub async fn statistics(&self) -> AggregateStatistics {
        self.view.read().await.statistics().clone()
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.view.read().await.snapshot()
    }
}
