//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::classifier::DEFAULT_SOURCE_EXTENSION;
use crate::domain::normalizer::DEFAULT_OUTPUT_EXTENSION;
use crate::domain::template::DEFAULT_MARKER;
use crate::domain::{Normalizer, PathClassifier};
use crate::error::{PagewrightError, PagewrightResult};

use super::loader::{self, ConfigWarning};

/// Site layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Source tree root
    pub pages: PathBuf,
    /// Output tree root
    pub output: PathBuf,
    /// Template file
    pub template: PathBuf,
    /// Substitution marker inside the template
    pub marker: String,
    /// Extension of source documents
    pub source_extension: String,
    /// Extension of output artifacts
    pub output_extension: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pages: PathBuf::from("pages"),
            output: PathBuf::from("out"),
            template: PathBuf::from("template.html"),
            marker: DEFAULT_MARKER.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl SiteConfig {
    /// Classifier for this site's source documents
    pub fn classifier(&self) -> PathClassifier {
        PathClassifier::new(self.source_extension.clone())
    }

    /// Normalizer for this site's output artifacts
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.output.clone(), self.output_extension.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter (`error`, `warn`, `info`, `debug`, `trace`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorMode,
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PagewrightResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PagewrightResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `pagewright.toml` from `root` if present, then apply env overrides
    pub fn load_or_default(root: &Path) -> PagewrightResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(root)
    }

    /// Apply environment variable overrides (PAGEWRIGHT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self, file: &Path) -> PagewrightResult<()> {
        let invalid = |message: &str| PagewrightError::InvalidConfig {
            file: file.to_path_buf(),
            message: message.to_string(),
        };

        if self.site.marker.is_empty() {
            return Err(invalid("site.marker must not be empty"));
        }
        if self.site.source_extension.is_empty() || self.site.source_extension.contains('.') {
            return Err(invalid("site.source_extension must be a bare extension like \"md\""));
        }
        if self.site.output_extension.is_empty() || self.site.output_extension.contains('.') {
            return Err(invalid("site.output_extension must be a bare extension like \"html\""));
        }
        if self.site.source_extension == self.site.output_extension {
            return Err(invalid("site.source_extension and site.output_extension must differ"));
        }
        Ok(())
    }
}
