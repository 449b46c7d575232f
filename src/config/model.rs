//! Config struct definition.

use crate::prompt::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "toolprompt.yaml";

/// Configuration for prompt rendering.
///
/// This struct represents the contents of `toolprompt.yaml`. Every field is
/// optional; command-line flags override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Template selection
    // =========================================================================
    /// Language of the built-in template.
    pub locale: Locale,

    /// Custom template file; replaces the built-in template when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_file: Option<PathBuf>,

    // =========================================================================
    // Inputs
    // =========================================================================
    /// Tool catalog (YAML or JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_file: Option<PathBuf>,

    /// Catalog tools to register, in catalog order. Unset registers every
    /// tool; an empty list registers none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_tools: Option<Vec<String>>,

    /// File whose content becomes `{{agent_rules}}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_rules_file: Option<PathBuf>,

    // =========================================================================
    // Environment overrides
    // =========================================================================
    /// Overrides the detected operating system description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_info: Option<String>,

    /// Overrides build tool detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_tool: Option<String>,

    /// Overrides `$SHELL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_structure: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_info: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_context: Option<String>,
}
