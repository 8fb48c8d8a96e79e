pub mod aggregation;
pub mod summary;

pub use aggregation::ReportBuilder;
pub use summary::SummaryService;
