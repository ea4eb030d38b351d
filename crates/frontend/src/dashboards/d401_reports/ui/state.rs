use crate::shared::export::CsvExportable;
use contracts::dashboards::d401_reports::dto::MetricBar;
use contracts::dashboards::d401_reports::{DateRange, ReportMetric, ReportsAnalytics};
use contracts::shared::formatting::format_number;
use leptos::prelude::*;

/// Reports page state. `analytics` is `None` while a load is in flight.
#[derive(Clone, Copy)]
pub struct ReportsState {
    pub analytics: RwSignal<Option<ReportsAnalytics>>,
    pub range: RwSignal<DateRange>,
    pub metric: RwSignal<ReportMetric>,
}

pub fn create_state() -> ReportsState {
    ReportsState {
        analytics: RwSignal::new(None),
        range: RwSignal::new(DateRange::default()),
        metric: RwSignal::new(ReportMetric::default()),
    }
}

/// Bar label text for one department value
pub fn format_metric_value(metric: ReportMetric, value: f64) -> String {
    match metric {
        ReportMetric::Engagement => format!("{}%", value.round()),
        ReportMetric::Points => format!("{} pts", format_number(Some(value))),
        ReportMetric::Goals => format!("{} goals", value.round()),
    }
}

pub fn export_filename(range: DateRange, metric: ReportMetric) -> String {
    format!("department_{}_{}d.csv", metric.code(), range.days())
}

impl CsvExportable for MetricBar {
    fn headers() -> Vec<&'static str> {
        vec!["Department", "Value", "Share %"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            format!("{}", self.value),
            format!("{:.1}", self.share),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use contracts::seed;

    fn analytics() -> ReportsAnalytics {
        ReportsAnalytics::build(&seed::load().unwrap(), DateRange::Last7Days)
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(format_metric_value(ReportMetric::Engagement, 89.0), "89%");
        assert_eq!(format_metric_value(ReportMetric::Points, 45200.0), "45,200 pts");
        assert_eq!(format_metric_value(ReportMetric::Goals, 5.0), "5 goals");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(DateRange::Last90Days, ReportMetric::Points),
            "department_points_90d.csv"
        );
    }

    #[test]
    fn test_bars_csv() {
        let bars = analytics().department_bars(ReportMetric::Engagement);
        let csv = build_csv(&bars);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Department,Value,Share %"));
        assert_eq!(lines.next(), Some("Engineering,89,89.0"));
        assert_eq!(csv.lines().count(), bars.len() + 1);
    }
}
