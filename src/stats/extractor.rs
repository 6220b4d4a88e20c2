//! @ai:module:intent Extract summary statistics from classifier report text
//! @ai:module:layer domain
//! @ai:module:public_api extract_statistics
//! @ai:module:stateless true

use crate::stats::types::{keys, MetricValue, RunStats};

const RESULTS_HEADER: &str = "Results Summary for CNN Model Architecture";
const RUNTIME_MARKER: &str = "Total Elapsed Runtime";

/// Labeled count lines, checked in this order.
const COUNT_LABELS: [(&str, &str); 3] = [
    ("N Images", keys::N_IMAGES),
    ("N Dog Images", keys::N_DOGS),
    ("N Not-Dog Images", keys::N_NOTDOGS),
];

/// @ai:intent One line of classifier output, classified by the report grammar
#[derive(Debug, Clone, PartialEq)]
enum ReportLine<'a> {
    ResultsHeader,
    Runtime(Option<&'a str>),
    Count { key: &'static str, raw: &'a str },
    Percent { label: &'a str, raw: &'a str },
    Other,
}

/// @ai:intent Classify a single line given whether the results section has started
/// @ai:effects pure
fn classify_line(line: &str, in_results: bool) -> ReportLine<'_> {
    if line.contains(RESULTS_HEADER) {
        return ReportLine::ResultsHeader;
    }

    if line.contains(RUNTIME_MARKER) {
        let runtime = line.rfind(": ").map(|idx| line[idx + 2..].trim());
        return ReportLine::Runtime(runtime);
    }

    if !in_results {
        return ReportLine::Other;
    }

    let Some((label, raw)) = line.split_once(':') else {
        return ReportLine::Other;
    };

    if let Some(&(_, key)) = COUNT_LABELS.iter().find(|(marker, _)| line.contains(*marker)) {
        return ReportLine::Count { key, raw };
    }

    if line.contains('%') {
        return ReportLine::Percent { label, raw };
    }

    ReportLine::Other
}

/// @ai:intent Normalize a percentage label into a metric key
/// @ai:effects pure
fn metric_key(label: &str) -> String {
    label.trim().replace(' ', "_").to_lowercase()
}

/// @ai:intent Parse a percentage value, keeping the raw text when it is not numeric
/// @ai:effects pure
fn percent_value(raw: &str) -> MetricValue {
    let cleaned = raw.replace('%', "");
    let cleaned = cleaned.trim();

    match cleaned.parse::<f64>() {
        Ok(value) => MetricValue::Percent(value),
        Err(_) => MetricValue::Text(cleaned.to_string()),
    }
}

/// @ai:intent Scrape image counts, percentages and runtime from report text
/// @ai:post never fails; unrecognized or malformed lines are skipped
/// @ai:post scanning stops at the first runtime line
/// @ai:effects pure
pub fn extract_statistics(output: &str) -> RunStats {
    let mut stats = RunStats::new();
    let mut in_results = false;

    for line in output.lines() {
        match classify_line(line, in_results) {
            ReportLine::ResultsHeader => in_results = true,
            ReportLine::Runtime(runtime) => {
                if let Some(runtime) = runtime {
                    stats.insert(keys::RUNTIME, MetricValue::Text(runtime.to_string()));
                }
                break;
            }
            ReportLine::Count { key, raw } => {
                if let Ok(count) = raw.trim().parse::<i64>() {
                    stats.insert(key, MetricValue::Count(count));
                }
            }
            ReportLine::Percent { label, raw } => {
                stats.insert(metric_key(label), percent_value(raw));
            }
            ReportLine::Other => {}
        }
    }

    stats
}
