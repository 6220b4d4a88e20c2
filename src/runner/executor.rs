//! @ai:module:intent Sequential comparison loop over the model architectures
//! @ai:module:layer application
//! @ai:module:public_api ComparisonExecutor
//! @ai:module:stateless false

use crate::model::ModelArch;
use crate::results::ResultsCollection;
use crate::runner::classifier::{ClassifierRunner, RunError};
use crate::stats::{extract_statistics, RunStats};

/// @ai:intent Runs the classifier for each architecture and records the outcomes
pub struct ComparisonExecutor<R: ClassifierRunner> {
    runner: R,
}

impl<R: ClassifierRunner> ComparisonExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// @ai:intent Run one architecture and scrape its report
    /// @ai:post None when the run failed, timed out, or printed nothing
    /// @ai:effects io
    pub async fn execute_model(&self, model: ModelArch) -> Option<RunStats> {
        println!("\nRunning {} model...", model.label());
        tracing::info!("Running classifier with --arch {}", model);

        let output = match self.runner.run(model).await {
            Ok(output) => output,
            Err(RunError::Timeout(limit)) => {
                tracing::error!("Timeout running {} after {:?}", model.label(), limit);
                return None;
            }
            Err(e) => {
                tracing::error!("Error running {}: {}", model.label(), e);
                return None;
            }
        };

        if output.is_empty() {
            tracing::warn!("{} produced no output", model.label());
            return None;
        }

        let stats = extract_statistics(&output);
        tracing::debug!("Extracted {} metrics for {}", stats.len(), model);
        Some(stats)
    }

    /// @ai:intent Run every architecture one after another, never retrying
    /// @ai:effects io
    pub async fn execute_all(&self, models: &[ModelArch]) -> ResultsCollection {
        let mut results = ResultsCollection::new();

        for &model in models {
            let outcome = self.execute_model(model).await;

            if outcome.is_some() {
                println!("✓ {} completed", model.label());
            } else {
                println!("✗ {} failed", model.label());
            }

            results.record(model, outcome);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PROCESSING_ORDER;
    use crate::runner::classifier::MockClassifierRunner;
    use crate::stats::{keys, MetricValue};

    const REPORT: &str = "\
*** Results Summary for CNN Model Architecture VGG ***
N Images: 40
pct Match: 87.5%
** Total Elapsed Runtime: 0:0:31
";

    #[tokio::test]
    async fn test_runs_models_in_order() {
        let runner = MockClassifierRunner::new()
            .with_output(ModelArch::Vgg, REPORT)
            .with_output(ModelArch::Alexnet, REPORT)
            .with_output(ModelArch::Resnet, REPORT);
        let executor = ComparisonExecutor::new(runner);

        let results = executor.execute_all(&PROCESSING_ORDER).await;

        assert_eq!(executor.runner().calls(), PROCESSING_ORDER.to_vec());
        let order: Vec<_> = results.iter().map(|(m, _)| m).collect();
        assert_eq!(order, PROCESSING_ORDER.to_vec());
        assert_eq!(results.succeeded(), 3);
    }

    #[tokio::test]
    async fn test_failure_recorded_as_absent_and_loop_continues() {
        let runner = MockClassifierRunner::new()
            .with_failure(ModelArch::Vgg)
            .with_output(ModelArch::Alexnet, REPORT)
            .with_output(ModelArch::Resnet, "");
        let executor = ComparisonExecutor::new(runner);

        let results = executor.execute_all(&PROCESSING_ORDER).await;

        assert_eq!(results.len(), 3);
        assert!(results.contains(ModelArch::Vgg));
        assert!(results.get(ModelArch::Vgg).is_none());
        assert!(results.get(ModelArch::Resnet).is_none());

        let alexnet = results.get(ModelArch::Alexnet).unwrap();
        assert_eq!(alexnet.get(keys::N_IMAGES), Some(&MetricValue::Count(40)));
        assert_eq!(alexnet.runtime(), Some("0:0:31"));
    }
}
