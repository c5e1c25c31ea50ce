// Chart configuration domain models, one variant per chart kind
use super::employee::{EmployeeRecord, FieldValue, RecordField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Area,
    Pie,
    Donut,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Pie,
        ChartKind::Donut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
        }
    }

    /// Parse a kind name, falling back to the bar layout for unknown names.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown chart kind {:?}, using bar", name);
            ChartKind::Bar
        })
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChartKind(pub String);

impl fmt::Display for UnknownChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chart kind: {}", self.0)
    }
}

impl std::error::Error for UnknownChartKind {}

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTitle {
    pub text: String,
}

impl ChartTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub position: AxisPosition,
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub title: ChartTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPlacement {
    Inside,
    OutsideEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarLabel {
    pub enabled: bool,
    pub color: String,
    pub font_weight: FontWeight,
    pub placement: LabelPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub enabled: bool,
}

/// Display options specific to the kind of a cartesian series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CartesianStyle {
    Bar { label: BarLabel },
    Line { marker: Marker },
    Area { marker: Marker },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianSeries {
    #[serde(flatten)]
    pub style: CartesianStyle,
    pub x_key: RecordField,
    pub y_key: RecordField,
    pub y_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartesianPoint<'a> {
    pub x: FieldValue<'a>,
    pub y: FieldValue<'a>,
}

impl CartesianSeries {
    pub fn points<'a>(&self, data: &'a [EmployeeRecord]) -> Vec<CartesianPoint<'a>> {
        data.iter()
            .map(|record| CartesianPoint {
                x: self.x_key.value_of(record),
                y: self.y_key.value_of(record),
            })
            .collect()
    }
}

/// Sector label text. The `{value}` placeholder is substituted by the
/// renderer, or by [`SectorLabel::format`] on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorLabel {
    pub format: String,
}

impl SectorLabel {
    pub const VALUE_PLACEHOLDER: &'static str = "{value}";

    pub fn format(&self, value: &FieldValue<'_>) -> String {
        let rendered = match value {
            FieldValue::Text(text) => text.to_string(),
            FieldValue::Count(count) => count.to_string(),
        };
        self.format.replace(Self::VALUE_PLACEHOLDER, &rendered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolarType {
    Pie,
    Donut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarSeries {
    #[serde(rename = "type")]
    pub series_type: PolarType,
    pub angle_key: RecordField,
    pub callout_label_key: RecordField,
    pub sector_label_key: RecordField,
    pub sector_label: SectorLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_radius_offset: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarPoint<'a> {
    pub label: FieldValue<'a>,
    pub angle: FieldValue<'a>,
    pub sector_label: String,
}

impl PolarSeries {
    pub fn points<'a>(&self, data: &'a [EmployeeRecord]) -> Vec<PolarPoint<'a>> {
        data.iter()
            .map(|record| PolarPoint {
                label: self.callout_label_key.value_of(record),
                angle: self.angle_key.value_of(record),
                sector_label: self.sector_label.format(&self.sector_label_key.value_of(record)),
            })
            .collect()
    }

    fn keys(&self) -> [RecordField; 3] {
        [self.angle_key, self.callout_label_key, self.sector_label_key]
    }
}

/// Bar, line and area charts: two series over a category and a number axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartesianChart {
    pub title: ChartTitle,
    pub data: Vec<EmployeeRecord>,
    pub series: [CartesianSeries; 2],
    pub axes: [Axis; 2],
}

/// Pie and donut charts: a single series, no axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolarChart {
    pub title: ChartTitle,
    pub data: Vec<EmployeeRecord>,
    pub series: [PolarSeries; 1],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartConfiguration {
    Bar(CartesianChart),
    Line(CartesianChart),
    Area(CartesianChart),
    Pie(PolarChart),
    Donut(PolarChart),
}

impl ChartConfiguration {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartConfiguration::Bar(_) => ChartKind::Bar,
            ChartConfiguration::Line(_) => ChartKind::Line,
            ChartConfiguration::Area(_) => ChartKind::Area,
            ChartConfiguration::Pie(_) => ChartKind::Pie,
            ChartConfiguration::Donut(_) => ChartKind::Donut,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartConfiguration::Bar(chart)
            | ChartConfiguration::Line(chart)
            | ChartConfiguration::Area(chart) => &chart.title.text,
            ChartConfiguration::Pie(chart) | ChartConfiguration::Donut(chart) => &chart.title.text,
        }
    }

    pub fn data(&self) -> &[EmployeeRecord] {
        match self {
            ChartConfiguration::Bar(chart)
            | ChartConfiguration::Line(chart)
            | ChartConfiguration::Area(chart) => &chart.data,
            ChartConfiguration::Pie(chart) | ChartConfiguration::Donut(chart) => &chart.data,
        }
    }

    pub fn series_count(&self) -> usize {
        match self {
            ChartConfiguration::Bar(chart)
            | ChartConfiguration::Line(chart)
            | ChartConfiguration::Area(chart) => chart.series.len(),
            ChartConfiguration::Pie(chart) | ChartConfiguration::Donut(chart) => chart.series.len(),
        }
    }

    /// Every record field referenced by a series of this chart.
    pub fn series_keys(&self) -> Vec<RecordField> {
        match self {
            ChartConfiguration::Bar(chart)
            | ChartConfiguration::Line(chart)
            | ChartConfiguration::Area(chart) => chart
                .series
                .iter()
                .flat_map(|s| [s.x_key, s.y_key])
                .collect(),
            ChartConfiguration::Pie(chart) | ChartConfiguration::Donut(chart) => {
                chart.series.iter().flat_map(PolarSeries::keys).collect()
            }
        }
    }

    pub fn has_axes(&self) -> bool {
        matches!(
            self,
            ChartConfiguration::Bar(_) | ChartConfiguration::Line(_) | ChartConfiguration::Area(_)
        )
    }
}
