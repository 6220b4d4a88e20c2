//! @ai:module:intent Fixed-width console comparison table
//! @ai:module:layer infrastructure
//! @ai:module:public_api ConsoleReporter
//! @ai:module:stateless true

use crate::results::ResultsCollection;
use crate::stats::{keys, RunStats};
use std::fmt::Write as FmtWrite;

const ERROR_CELL: &str = "ERROR";
const MISSING_CELL: &str = "N/A";

/// Console columns: (header, metric key).
const COLUMNS: [(&str, &str); 4] = [
    ("% Dogs", keys::PCT_CORRECT_DOGS),
    ("% Breeds", keys::PCT_CORRECT_BREED),
    ("% Not-Dogs", keys::PCT_CORRECT_NOTDOGS),
    ("% Match", keys::PCT_MATCH),
];

/// @ai:intent Prints the per-model percentage table
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Format one metric cell
    /// @ai:effects pure
    fn cell(stats: &RunStats, key: &str) -> String {
        stats
            .get(key)
            .map(|value| value.format_percent())
            .unwrap_or_else(|| MISSING_CELL.to_string())
    }

    /// @ai:intent Render the table; failed runs show ERROR in every column
    /// @ai:effects pure
    pub fn render(&self, results: &ResultsCollection) -> String {
        let mut output = String::new();

        writeln!(output).unwrap();
        writeln!(output, "{}", "=".repeat(80)).unwrap();
        writeln!(output, "RESULTS COMPARISON TABLE").unwrap();
        writeln!(output, "{}", "=".repeat(80)).unwrap();

        write!(output, "{:<10}", "Model").unwrap();
        for (header, _) in COLUMNS {
            write!(output, " {:<12}", header).unwrap();
        }
        writeln!(output).unwrap();
        writeln!(output, "{}", "-".repeat(60)).unwrap();

        for (model, stats) in results.iter() {
            write!(output, "{:<10}", model.label()).unwrap();

            for (_, key) in COLUMNS {
                let cell = match stats {
                    Some(stats) => Self::cell(stats, key),
                    None => ERROR_CELL.to_string(),
                };
                write!(output, " {:<12}", cell).unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }

    /// @ai:intent Print the table to stdout
    /// @ai:effects io
    pub fn print(&self, results: &ResultsCollection) {
        print!("{}", self.render(results));
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
