mod run_report;

pub use run_report::RunReport;
pub use run_report::SplitReport;
