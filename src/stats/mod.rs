//! @ai:module:intent Statistics scraped from classifier output
//! @ai:module:layer domain
//! @ai:module:public_api RunStats, MetricValue, extract_statistics, keys
//! @ai:module:stateless true

pub mod extractor;
pub mod types;

pub use extractor::extract_statistics;
pub use types::{keys, MetricValue, RunStats};
