// Chart configuration builder - Maps records to a chart per kind
use crate::domain::chart::{
    Axis, AxisPosition, AxisType, BarLabel, CartesianChart, CartesianSeries, CartesianStyle,
    ChartConfiguration, ChartKind, ChartTitle, FontWeight, LabelPlacement, Marker, PolarChart,
    PolarSeries, PolarType, SectorLabel,
};
use crate::domain::employee::{EmployeeRecord, RecordField};

const COMPLETED_NAME: &str = "Tasks Completed";
const PENDING_NAME: &str = "Tasks Pending";
const SECTOR_LABEL_FORMAT: &str = "{value} tasks";
const DONUT_INNER_RADIUS_OFFSET: i32 = -40;

/// Build the chart configuration for `kind` over `records`.
///
/// Total over every kind, including for an empty record list, in which case
/// the series simply have no data points.
pub fn build_chart_config(kind: ChartKind, records: &[EmployeeRecord]) -> ChartConfiguration {
    match kind {
        ChartKind::Bar => ChartConfiguration::Bar(cartesian_chart(
            "Employee Tasks Performance",
            records,
            || CartesianStyle::Bar {
                label: BarLabel {
                    enabled: true,
                    color: "black".to_string(),
                    font_weight: FontWeight::Bold,
                    placement: LabelPlacement::OutsideEnd,
                },
            },
        )),
        ChartKind::Line => ChartConfiguration::Line(cartesian_chart(
            "Employee Tasks Trend",
            records,
            || CartesianStyle::Line { marker: Marker { enabled: true } },
        )),
        ChartKind::Area => ChartConfiguration::Area(cartesian_chart(
            "Employee Tasks Overview",
            records,
            || CartesianStyle::Area { marker: Marker { enabled: false } },
        )),
        ChartKind::Pie => ChartConfiguration::Pie(polar_chart(
            "Tasks Completed by Employee",
            records,
            PolarType::Pie,
            RecordField::TasksCompleted,
            None,
        )),
        ChartKind::Donut => ChartConfiguration::Donut(polar_chart(
            "Tasks Pending by Employee",
            records,
            PolarType::Donut,
            RecordField::TasksPending,
            Some(DONUT_INNER_RADIUS_OFFSET),
        )),
    }
}

fn cartesian_chart(
    title: &str,
    records: &[EmployeeRecord],
    style: impl Fn() -> CartesianStyle,
) -> CartesianChart {
    let series = |y_key: RecordField, y_name: &str| CartesianSeries {
        style: style(),
        x_key: RecordField::Employee,
        y_key,
        y_name: y_name.to_string(),
    };

    CartesianChart {
        title: ChartTitle::new(title),
        data: records.to_vec(),
        series: [
            series(RecordField::TasksCompleted, COMPLETED_NAME),
            series(RecordField::TasksPending, PENDING_NAME),
        ],
        axes: [
            Axis {
                position: AxisPosition::Bottom,
                axis_type: AxisType::Category,
                title: ChartTitle::new("Employee"),
            },
            Axis {
                position: AxisPosition::Left,
                axis_type: AxisType::Number,
                title: ChartTitle::new("Tasks"),
            },
        ],
    }
}

fn polar_chart(
    title: &str,
    records: &[EmployeeRecord],
    series_type: PolarType,
    value_key: RecordField,
    inner_radius_offset: Option<i32>,
) -> PolarChart {
    PolarChart {
        title: ChartTitle::new(title),
        data: records.to_vec(),
        series: [PolarSeries {
            series_type,
            angle_key: value_key,
            callout_label_key: RecordField::Employee,
            sector_label_key: value_key,
            sector_label: SectorLabel { format: SECTOR_LABEL_FORMAT.to_string() },
            inner_radius_offset,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::FieldValue;

    fn sample() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord::new("A", "X", 3, 1),
            EmployeeRecord::new("B", "X", 2, 4),
        ]
    }

    fn y_values(series: &CartesianSeries, data: &[EmployeeRecord]) -> Vec<FieldValue<'static>> {
        series
            .points(data)
            .into_iter()
            .map(|p| match p.y {
                FieldValue::Count(n) => FieldValue::Count(n),
                FieldValue::Text(_) => panic!("y value should be a count"),
            })
            .collect()
    }

    #[test]
    fn test_bar_two_series_with_values() {
        let records = sample();
        let ChartConfiguration::Bar(chart) = build_chart_config(ChartKind::Bar, &records) else {
            panic!("expected bar configuration");
        };

        assert_eq!(chart.title.text, "Employee Tasks Performance");
        assert_eq!(chart.series[0].x_key, RecordField::Employee);
        assert_eq!(chart.series[0].y_key, RecordField::TasksCompleted);
        assert_eq!(chart.series[1].x_key, RecordField::Employee);
        assert_eq!(chart.series[1].y_key, RecordField::TasksPending);

        assert_eq!(
            y_values(&chart.series[0], &chart.data),
            vec![FieldValue::Count(3), FieldValue::Count(2)]
        );
        assert_eq!(
            y_values(&chart.series[1], &chart.data),
            vec![FieldValue::Count(1), FieldValue::Count(4)]
        );

        let xs: Vec<FieldValue> = chart.series[0].points(&chart.data).into_iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![FieldValue::Text("A"), FieldValue::Text("B")]);

        for series in &chart.series {
            let CartesianStyle::Bar { label } = &series.style else {
                panic!("expected bar style");
            };
            assert!(label.enabled);
            assert_eq!(label.font_weight, FontWeight::Bold);
            assert_eq!(label.placement, LabelPlacement::OutsideEnd);
        }
    }

    #[test]
    fn test_bar_empty_records() {
        let config = build_chart_config(ChartKind::Bar, &[]);
        assert_eq!(config.series_count(), 2);
        assert_eq!(
            config.series_keys(),
            vec![
                RecordField::Employee,
                RecordField::TasksCompleted,
                RecordField::Employee,
                RecordField::TasksPending,
            ]
        );
        let ChartConfiguration::Bar(chart) = config else {
            panic!("expected bar configuration");
        };
        assert!(chart.series.iter().all(|s| s.points(&chart.data).is_empty()));
    }

    #[test]
    fn test_line_and_area_markers() {
        let records = sample();
        let ChartConfiguration::Line(line) = build_chart_config(ChartKind::Line, &records) else {
            panic!("expected line configuration");
        };
        assert!(line
            .series
            .iter()
            .all(|s| s.style == CartesianStyle::Line { marker: Marker { enabled: true } }));

        let ChartConfiguration::Area(area) = build_chart_config(ChartKind::Area, &records) else {
            panic!("expected area configuration");
        };
        assert!(area
            .series
            .iter()
            .all(|s| s.style == CartesianStyle::Area { marker: Marker { enabled: false } }));
        assert_eq!(area.series[1].y_name, "Tasks Pending");
        assert_eq!(line.series[0].y_name, "Tasks Completed");
        assert_eq!(line.series[1].y_name, "Tasks Pending");
    }

    #[test]
    fn test_cartesian_axes() {
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Area] {
            let config = build_chart_config(kind, &sample());
            assert!(config.has_axes());
            let json = serde_json::to_value(&config).unwrap();
            assert_eq!(json["axes"][0]["position"], "bottom");
            assert_eq!(json["axes"][0]["type"], "category");
            assert_eq!(json["axes"][0]["title"]["text"], "Employee");
            assert_eq!(json["axes"][1]["position"], "left");
            assert_eq!(json["axes"][1]["type"], "number");
            assert_eq!(json["axes"][1]["title"]["text"], "Tasks");
        }
    }

    #[test]
    fn test_pie_single_completed_series() {
        let records = sample();
        let config = build_chart_config(ChartKind::Pie, &records);
        assert!(!config.has_axes());
        assert_eq!(config.title(), "Tasks Completed by Employee");

        let ChartConfiguration::Pie(chart) = config else {
            panic!("expected pie configuration");
        };
        let series = &chart.series[0];
        assert_eq!(series.angle_key, RecordField::TasksCompleted);
        assert_eq!(series.callout_label_key, RecordField::Employee);
        assert_eq!(series.sector_label_key, RecordField::TasksCompleted);
        assert_eq!(series.inner_radius_offset, None);

        let labels: Vec<String> = series.points(&chart.data).into_iter().map(|p| p.sector_label).collect();
        assert_eq!(labels, vec!["3 tasks", "2 tasks"]);
    }

    #[test]
    fn test_donut_single_pending_series() {
        let records = sample();
        let ChartConfiguration::Donut(chart) = build_chart_config(ChartKind::Donut, &records) else {
            panic!("expected donut configuration");
        };
        assert_eq!(chart.series.len(), 1);
        let series = &chart.series[0];
        assert_eq!(series.angle_key, RecordField::TasksPending);
        assert_eq!(series.sector_label_key, RecordField::TasksPending);
        assert!(series.inner_radius_offset.is_some_and(|offset| offset < 0));

        let labels: Vec<String> = series.points(&chart.data).into_iter().map(|p| p.sector_label).collect();
        assert_eq!(labels, vec!["1 tasks", "4 tasks"]);
    }

    #[test]
    fn test_polar_wire_shape() {
        let json = serde_json::to_value(build_chart_config(ChartKind::Donut, &sample())).unwrap();
        assert_eq!(json["kind"], "donut");
        assert!(json.get("axes").is_none());
        assert_eq!(json["series"][0]["angleKey"], "tasksPending");
        assert_eq!(json["series"][0]["calloutLabelKey"], "employee");
        assert_eq!(json["series"][0]["type"], "donut");
        assert_eq!(json["series"][0]["innerRadiusOffset"], -40);
        assert_eq!(json["data"][1]["tasksPending"], 4);

        let pie = serde_json::to_value(build_chart_config(ChartKind::Pie, &sample())).unwrap();
        assert_eq!(pie["series"][0]["type"], "pie");
        assert!(pie["series"][0].get("innerRadiusOffset").is_none());

        let ChartConfiguration::Pie(chart) = build_chart_config(ChartKind::Pie, &sample()) else {
            panic!("expected pie configuration");
        };
        let points = serde_json::to_value(chart.series[0].points(&chart.data)).unwrap();
        assert_eq!(points[0]["sectorLabel"], "3 tasks");
        assert_eq!(points[0]["label"], "A");
        assert_eq!(points[0]["angle"], 3);
        assert!(points[0].get("sector_label").is_none());
    }

    #[test]
    fn test_every_series_carries_its_type() {
        for kind in ChartKind::ALL {
            let json = serde_json::to_value(build_chart_config(kind, &[])).unwrap();
            for series in json["series"].as_array().unwrap() {
                assert_eq!(series["type"], kind.as_str());
            }
        }
    }

    #[test]
    fn test_every_kind_matches_its_variant() {
        for kind in ChartKind::ALL {
            let config = build_chart_config(kind, &[]);
            assert_eq!(config.kind(), kind);
            assert!(config.data().is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let records = sample();
        for kind in ChartKind::ALL {
            assert_eq!(build_chart_config(kind, &records), build_chart_config(kind, &records));
        }
    }
}
