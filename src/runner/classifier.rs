//! @ai:module:intent Invoke the external classifier script for one architecture
//! @ai:module:layer infrastructure
//! @ai:module:public_api ClassifierRunner, ScriptRunner, MockClassifierRunner, RunError
//! @ai:module:stateless true

use crate::config::CompareConfig;
use crate::model::ModelArch;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// @ai:intent Reasons a classifier run yields no result
#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("classifier exited with status {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("classifier timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// @ai:intent Trait for running the classifier against one architecture
#[allow(async_fn_in_trait)]
pub trait ClassifierRunner: Send + Sync {
    /// @ai:intent Run the classifier and return its captured standard output
    async fn run(&self, model: ModelArch) -> Result<String, RunError>;
}

/// @ai:intent Runs the classifier script as a child process with a bounded wait
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    interpreter: String,
    script: PathBuf,
    image_dir: PathBuf,
    dogfile: PathBuf,
    timeout: Duration,
}

impl ScriptRunner {
    pub fn new(
        interpreter: impl Into<String>,
        script: PathBuf,
        image_dir: PathBuf,
        dogfile: PathBuf,
        timeout: Duration,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            script,
            image_dir,
            dogfile,
            timeout,
        }
    }

    /// @ai:intent Build a runner from the loaded configuration
    /// @ai:effects pure
    pub fn from_config(config: &CompareConfig) -> Self {
        Self::new(
            config.run.interpreter.clone(),
            config.paths.classifier_script.clone(),
            config.paths.image_dir.clone(),
            config.paths.dogfile.clone(),
            config.run.timeout(),
        )
    }

    /// @ai:intent Assemble the classifier command line for a model
    /// @ai:effects pure
    fn command(&self, model: ModelArch) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.script)
            .arg("--dir")
            .arg(&self.image_dir)
            .arg("--arch")
            .arg(model.as_str())
            .arg("--dogfile")
            .arg(&self.dogfile);

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        // A timed-out run drops the child future; make sure the process goes with it.
        cmd.kill_on_drop(true);
        cmd
    }
}

impl ClassifierRunner for ScriptRunner {
    /// @ai:intent Run the script, waiting at most the configured timeout
    /// @ai:effects io
    async fn run(&self, model: ModelArch) -> Result<String, RunError> {
        tracing::debug!(
            "Spawning {} {} for {}",
            self.interpreter,
            self.script.display(),
            model
        );

        let child = self.command(model).spawn().map_err(|source| RunError::Spawn {
            program: self.interpreter.clone(),
            source,
        })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => return Err(RunError::Timeout(self.timeout)),
        };

        if !output.status.success() {
            return Err(RunError::NonZeroExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// @ai:intent Canned classifier output, used to drive the workflow without a subprocess
#[derive(Debug, Default)]
pub struct MockClassifierRunner {
    outputs: HashMap<ModelArch, Option<String>>,
    calls: Mutex<Vec<ModelArch>>,
}

impl MockClassifierRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `model` with `output`.
    pub fn with_output(mut self, model: ModelArch, output: impl Into<String>) -> Self {
        self.outputs.insert(model, Some(output.into()));
        self
    }

    /// Make runs of `model` fail with a non-zero exit.
    pub fn with_failure(mut self, model: ModelArch) -> Self {
        self.outputs.insert(model, None);
        self
    }

    /// Models run so far, in call order.
    pub fn calls(&self) -> Vec<ModelArch> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl ClassifierRunner for MockClassifierRunner {
    async fn run(&self, model: ModelArch) -> Result<String, RunError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(model);
        }

        match self.outputs.get(&model) {
            Some(Some(output)) => Ok(output.clone()),
            _ => Err(RunError::NonZeroExit {
                code: Some(1),
                stderr: format!("no mock output for {}", model),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_runner_outputs_and_failures() {
        let runner = MockClassifierRunner::new()
            .with_output(ModelArch::Vgg, "report")
            .with_failure(ModelArch::Resnet);

        assert_eq!(runner.run(ModelArch::Vgg).await.unwrap(), "report");
        assert!(matches!(
            runner.run(ModelArch::Resnet).await,
            Err(RunError::NonZeroExit { .. })
        ));
        assert!(runner.run(ModelArch::Alexnet).await.is_err());
        assert_eq!(
            runner.calls(),
            vec![ModelArch::Vgg, ModelArch::Resnet, ModelArch::Alexnet]
        );
    }

    #[test]
    fn test_from_config_uses_paths() {
        let config = CompareConfig::default();
        let runner = ScriptRunner::from_config(&config);
        assert_eq!(runner.interpreter, "python");
        assert_eq!(runner.script, PathBuf::from("check_images.py"));
        assert_eq!(runner.timeout, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_missing_interpreter_is_spawn_error() {
        let runner = ScriptRunner::new(
            "nonexistent_interpreter_xyz",
            PathBuf::from("check_images.py"),
            PathBuf::from("uploaded_images/"),
            PathBuf::from("dognames.txt"),
            Duration::from_secs(5),
        );

        let err = runner.run(ModelArch::Vgg).await.unwrap_err();
        assert!(matches!(err, RunError::Spawn { .. }));
        assert!(err.to_string().contains("nonexistent_interpreter_xyz"));
    }

    #[cfg(unix)]
    fn script_runner(temp: &tempfile::TempDir, body: &str, timeout: Duration) -> ScriptRunner {
        let script = temp.path().join("check_images.sh");
        std::fs::write(&script, body).unwrap();
        ScriptRunner::new(
            "sh",
            script,
            PathBuf::from("uploaded_images/"),
            PathBuf::from("dognames.txt"),
            timeout,
        )
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_stdout_and_arguments() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = script_runner(&temp, "echo \"$@\"\n", Duration::from_secs(10));

        let output = runner.run(ModelArch::Alexnet).await.unwrap();
        assert_eq!(
            output.trim(),
            "--dir uploaded_images/ --arch alexnet --dogfile dognames.txt"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_reports_stderr() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = script_runner(
            &temp,
            "echo partial\necho boom >&2\nexit 3\n",
            Duration::from_secs(10),
        );

        match runner.run(ModelArch::Vgg).await {
            Err(RunError::NonZeroExit { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_discards_output() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = script_runner(&temp, "echo started\nsleep 5\n", Duration::from_millis(200));

        let err = runner.run(ModelArch::Resnet).await.unwrap_err();
        assert!(matches!(err, RunError::Timeout(d) if d == Duration::from_millis(200)));
    }
}
