//! @ai:module:intent Dog-classifier architecture comparison library
//! @ai:module:layer application
//! @ai:module:public_api config, model, preflight, runner, stats, results, analyzer, report

pub mod analyzer;
pub mod config;
pub mod model;
pub mod preflight;
pub mod report;
pub mod results;
pub mod runner;
pub mod stats;

pub use analyzer::{Analysis, Analyzer, Category};
pub use config::CompareConfig;
pub use model::{ModelArch, DISPLAY_ORDER, PROCESSING_ORDER};
pub use preflight::{PreflightStatus, PreflightValidator};
pub use report::{ConsoleReporter, JsonReporter, TableImageReporter};
pub use results::ResultsCollection;
pub use runner::{ClassifierRunner, ComparisonExecutor, MockClassifierRunner, RunError, ScriptRunner};
pub use stats::{extract_statistics, MetricValue, RunStats};
