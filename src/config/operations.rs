//! Config loading, validation, and path resolution.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{PromptError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields are ignored. Relative paths inside the file are resolved
    /// against the directory containing it.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::Io)` - The file could not be read
    /// * `Err(PromptError::Config)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Io(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content).map_err(|e| match e {
            PromptError::Config(msg) => PromptError::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `toolprompt.yaml` from `dir` if it exists, defaults otherwise.
    pub fn load_optional<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PromptError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Path fields, when present, must be non-empty, and so must every
    /// `enabled_tools` entry.
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("template_file", &self.template_file),
            ("tools_file", &self.tools_file),
            ("agent_rules_file", &self.agent_rules_file),
        ];
        for (field, value) in paths {
            if let Some(path) = value {
                if path.as_os_str().is_empty() {
                    return Err(PromptError::Config(format!(
                        "config validation failed: {} must not be empty",
                        field
                    )));
                }
            }
        }

        for name in self.enabled_tools.iter().flatten() {
            if name.trim().is_empty() {
                return Err(PromptError::Config(
                    "config validation failed: enabled_tools entries must be non-empty"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Make relative path fields relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.template_file,
            &mut self.tools_file,
            &mut self.agent_rules_file,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                let resolved = resolve(base, path);
                *path = resolved;
            }
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if base.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
