pub mod classifier;
pub mod metric;
pub mod statistics;
pub mod types;

pub use classifier::{classify, classify_sample};
pub use metric::{build_metric, MetricDefinition, METRIC_DEFINITIONS};
pub use statistics::{median, sample_std_dev};
pub use types::{MetricResult, MetricValue, Polarity, Rating};
