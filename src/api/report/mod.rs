pub mod pdf;
pub use pdf::{ReportRequest, build_report_payload};
