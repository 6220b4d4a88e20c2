//! @ai:module:intent JSON dump of the comparison results
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, ComparisonSnapshot
//! @ai:module:stateless true

use crate::results::ResultsCollection;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// @ai:intent Serialized view of one comparison run
#[derive(Debug, Serialize)]
pub struct ComparisonSnapshot<'a> {
    pub timestamp: String,
    pub recommended: Option<&'a str>,
    pub results: &'a ResultsCollection,
}

/// @ai:intent Writes results as pretty-printed JSON
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Write the results and recommendation to a JSON file
    /// @ai:effects fs:write
    pub fn generate(
        &self,
        results: &ResultsCollection,
        recommended: Option<&str>,
        output_path: &Path,
    ) -> Result<()> {
        let snapshot = ComparisonSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            recommended,
            results,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        tracing::info!("JSON results saved to {}", output_path.display());
        Ok(())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelArch;
    use crate::stats::{keys, MetricValue, RunStats};
    use tempfile::TempDir;

    #[test]
    fn test_generate_json_report() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("results.json");

        let mut stats = RunStats::new();
        stats.insert(keys::PCT_MATCH, MetricValue::Percent(93.3));
        stats.insert(keys::RUNTIME, MetricValue::Text("0:0:5".to_string()));

        let mut results = ResultsCollection::new();
        results.record(ModelArch::Vgg, None);
        results.record(ModelArch::Resnet, Some(stats));

        reporter.generate(&results, Some("resnet"), &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["recommended"], "resnet");
        assert!(value["results"]["vgg"].is_null());
        assert_eq!(value["results"]["resnet"]["pct_match"], 93.3);
        assert_eq!(value["results"]["resnet"]["runtime"], "0:0:5");
        assert!(value["timestamp"].is_string());
    }
}
