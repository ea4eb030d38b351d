pub mod dashboard;
pub mod state;

pub use dashboard::ReportsDashboard;
