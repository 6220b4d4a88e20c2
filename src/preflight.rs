//! @ai:module:intent Validate required inputs before any classifier run
//! @ai:module:layer infrastructure
//! @ai:module:public_api PreflightValidator, PreflightStatus, MissingPath
//! @ai:module:stateless true

use crate::config::CompareConfig;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// @ai:intent Kind of required input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredPath {
    ClassifierScript,
    ImageDir,
    Dogfile,
}

/// @ai:intent A required input that does not exist
#[derive(Debug, Clone, PartialEq)]
pub struct MissingPath {
    pub kind: RequiredPath,
    pub path: PathBuf,
}

impl MissingPath {
    /// @ai:intent Error line printed for the missing input
    /// @ai:effects pure
    pub fn message(&self) -> String {
        match self.kind {
            RequiredPath::ClassifierScript => format!(
                "ERROR: {} not found in current directory",
                self.path.display()
            ),
            RequiredPath::ImageDir => {
                format!("ERROR: Image directory '{}' not found", self.path.display())
            }
            RequiredPath::Dogfile => {
                format!("ERROR: Dog names file '{}' not found", self.path.display())
            }
        }
    }
}

/// @ai:intent Result of preflight validation
#[derive(Debug)]
pub struct PreflightStatus {
    pub missing: Vec<MissingPath>,
    pub image_count: usize,
}

impl PreflightStatus {
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}

/// @ai:intent Checks that the classifier script, image directory and labels file exist
pub struct PreflightValidator;

impl PreflightValidator {
    /// @ai:intent Count image files below a directory
    /// @ai:effects fs:read
    fn count_images(dir: &Path) -> usize {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                    .unwrap_or(false)
            })
            .count()
    }

    /// @ai:intent Validate all required paths and return status
    /// @ai:effects fs:read
    pub fn validate(config: &CompareConfig) -> PreflightStatus {
        let required = [
            (RequiredPath::ClassifierScript, &config.paths.classifier_script),
            (RequiredPath::ImageDir, &config.paths.image_dir),
            (RequiredPath::Dogfile, &config.paths.dogfile),
        ];

        let missing: Vec<MissingPath> = required
            .into_iter()
            .filter(|(_, path)| !path.exists())
            .map(|(kind, path)| MissingPath {
                kind,
                path: path.clone(),
            })
            .collect();

        let image_count = if config.paths.image_dir.is_dir() {
            Self::count_images(&config.paths.image_dir)
        } else {
            0
        };

        PreflightStatus {
            missing,
            image_count,
        }
    }

    /// @ai:intent Print missing inputs and log image-directory warnings
    /// @ai:effects io
    pub fn report(status: &PreflightStatus, image_dir: &Path) {
        for missing in &status.missing {
            println!("{}", missing.message());
        }

        if status.is_ready() {
            if status.image_count == 0 {
                tracing::warn!("No image files found in {}", image_dir.display());
            } else {
                tracing::info!("Found {} images in {}", status.image_count, image_dir.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> CompareConfig {
        let mut config = CompareConfig::default();
        config.paths.classifier_script = temp.path().join("check_images.py");
        config.paths.image_dir = temp.path().join("uploaded_images");
        config.paths.dogfile = temp.path().join("dognames.txt");
        config
    }

    #[test]
    fn test_all_present() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        std::fs::write(&config.paths.classifier_script, "").unwrap();
        std::fs::write(&config.paths.dogfile, "beagle\n").unwrap();
        std::fs::create_dir(&config.paths.image_dir).unwrap();
        std::fs::write(config.paths.image_dir.join("Beagle_01.jpg"), b"").unwrap();
        std::fs::write(config.paths.image_dir.join("Cat_01.JPG"), b"").unwrap();
        std::fs::write(config.paths.image_dir.join("notes.txt"), b"").unwrap();

        let status = PreflightValidator::validate(&config);
        assert!(status.is_ready());
        assert_eq!(status.image_count, 2);
    }

    #[test]
    fn test_reports_every_missing_path() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        std::fs::write(&config.paths.dogfile, "beagle\n").unwrap();

        let status = PreflightValidator::validate(&config);
        assert!(!status.is_ready());

        let kinds: Vec<_> = status.missing.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![RequiredPath::ClassifierScript, RequiredPath::ImageDir]);
        assert_eq!(status.image_count, 0);
    }

    #[test]
    fn test_messages() {
        let missing = MissingPath {
            kind: RequiredPath::Dogfile,
            path: PathBuf::from("dognames.txt"),
        };
        assert_eq!(missing.message(), "ERROR: Dog names file 'dognames.txt' not found");

        let missing = MissingPath {
            kind: RequiredPath::ClassifierScript,
            path: PathBuf::from("check_images.py"),
        };
        assert_eq!(missing.message(), "ERROR: check_images.py not found in current directory");
    }
}
