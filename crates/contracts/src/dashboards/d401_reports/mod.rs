pub mod dto;

pub use dto::{DateRange, ReportMetric, ReportsAnalytics};
