//! @ai:module:intent Configuration structs for the comparison run
//! @ai:module:layer infrastructure
//! @ai:module:public_api CompareConfig, RunConfig, PathConfig, DEFAULT_CONFIG_FILE
//! @ai:module:stateless true

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "model-compare.toml";

/// @ai:intent Main configuration for the comparison tool
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub paths: PathConfig,
}

/// @ai:intent How the classifier script is invoked
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// @ai:intent Input and output locations
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_classifier_script")]
    pub classifier_script: PathBuf,
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    #[serde(default = "default_dogfile")]
    pub dogfile: PathBuf,
    #[serde(default = "default_output_image")]
    pub output_image: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_output: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            classifier_script: default_classifier_script(),
            image_dir: default_image_dir(),
            dogfile: default_dogfile(),
            output_image: default_output_image(),
            json_output: None,
        }
    }
}

fn default_interpreter() -> String {
    "python".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_classifier_script() -> PathBuf {
    PathBuf::from("check_images.py")
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("uploaded_images/")
}

fn default_dogfile() -> PathBuf {
    PathBuf::from("dognames.txt")
}

fn default_output_image() -> PathBuf {
    PathBuf::from("results_table_uploaded-images.png")
}

impl RunConfig {
    /// @ai:intent Bounded wait applied to each classifier run
    /// @ai:effects pure
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CompareConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// @ai:intent Load the config file if present, otherwise fall back to defaults
    /// @ai:effects fs:read
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            tracing::info!("Loading configuration from {}", path.display());
            Self::load(path)
        } else {
            tracing::debug!("No {} found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// @ai:intent Resolve the configuration for a run, reporting an unreadable file
    /// @ai:post None after printing an ERROR line when the file exists but cannot be loaded
    /// @ai:effects fs:read, io
    pub fn load_for_run(path: &Path) -> Option<Self> {
        match Self::load_or_default(path) {
            Ok(config) => Some(config),
            Err(e) => {
                println!("ERROR: {:#}", e);
                None
            }
        }
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Apply command-line path overrides
    /// @ai:effects pure
    pub fn with_overrides(mut self, image_dir: Option<PathBuf>, dogfile: Option<PathBuf>) -> Self {
        if let Some(dir) = image_dir {
            self.paths.image_dir = dir;
        }
        if let Some(file) = dogfile {
            self.paths.dogfile = file;
        }
        self
    }
}
