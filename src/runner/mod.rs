//! @ai:module:intent Classifier invocation and the per-model run loop
//! @ai:module:layer infrastructure
//! @ai:module:public_api ClassifierRunner, ScriptRunner, MockClassifierRunner, ComparisonExecutor

pub mod classifier;
pub mod executor;

pub use classifier::{ClassifierRunner, MockClassifierRunner, RunError, ScriptRunner};
pub use executor::ComparisonExecutor;
