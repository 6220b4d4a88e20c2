//! @ai:module:intent Report sinks for comparison results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ConsoleReporter, JsonReporter, TableImageReporter

pub mod console;
pub mod json_report;
pub mod table_image;

pub use console::ConsoleReporter;
pub use json_report::JsonReporter;
pub use table_image::{ResultsTable, TableImageReporter};
