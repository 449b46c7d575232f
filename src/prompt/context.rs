//! Context snapshot for prompt generation.
//!
//! A `ContextSnapshot` is an immutable record of the environment facts a
//! prompt describes. [`ContextSnapshot::to_variable_table`] projects it onto
//! the fixed variable set below; every variable is always present, and absent
//! optional facts become empty strings.
//!
//! # Variables
//!
//! - `{{current_file}}` - File the user is looking at (may be empty)
//! - `{{project_path}}` - Project root
//! - `{{project_structure}}` - Project layout summary (may be empty)
//! - `{{os_info}}` - Operating system description
//! - `{{timestamp}}` - UTC time as `YYYY-MM-DDTHH:MM:SSZ`
//! - `{{tool_list}}` - Formatted tool blocks
//! - `{{agent_rules}}` - Project-specific agent rules (may be empty)
//! - `{{build_tool}}` - Build system identifier
//! - `{{shell}}` - Shell path
//! - `{{module_info}}` - Module information (may be empty)
//! - `{{framework_context}}` - Framework notes (may be empty)

use super::variables::VariableTable;
use crate::error::{PromptError, Result};
use crate::schema::format_tool_list;
use crate::tool::ToolSnapshot;
use chrono::{DateTime, Utc};

/// Fixed textual format for `{{timestamp}}`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const CURRENT_FILE: &str = "current_file";
pub const PROJECT_PATH: &str = "project_path";
pub const PROJECT_STRUCTURE: &str = "project_structure";
pub const OS_INFO: &str = "os_info";
pub const TIMESTAMP: &str = "timestamp";
pub const TOOL_LIST: &str = "tool_list";
pub const AGENT_RULES: &str = "agent_rules";
pub const BUILD_TOOL: &str = "build_tool";
pub const SHELL: &str = "shell";
pub const MODULE_INFO: &str = "module_info";
pub const FRAMEWORK_CONTEXT: &str = "framework_context";

/// Every variable a snapshot defines, in table order.
pub const VARIABLE_NAMES: [&str; 11] = [
    CURRENT_FILE,
    PROJECT_PATH,
    PROJECT_STRUCTURE,
    OS_INFO,
    TIMESTAMP,
    TOOL_LIST,
    AGENT_RULES,
    BUILD_TOOL,
    SHELL,
    MODULE_INFO,
    FRAMEWORK_CONTEXT,
];

/// Environment facts captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSnapshot {
    /// File currently open, if any.
    pub current_file: Option<String>,
    /// Project root path.
    pub project_path: String,
    /// Summary of the project layout.
    pub project_structure: Option<String>,
    /// Operating system description.
    pub os_info: String,
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Formatted tool-list text.
    pub tool_list: String,
    /// Agent rules text.
    pub agent_rules: Option<String>,
    /// Build system identifier (e.g. `cargo`, `gradle`).
    pub build_tool: String,
    /// Shell path.
    pub shell: String,
    /// Module information.
    pub module_info: Option<String>,
    /// Framework context.
    pub framework_context: Option<String>,
}

impl ContextSnapshot {
    /// Start building a snapshot.
    pub fn builder() -> ContextSnapshotBuilder {
        ContextSnapshotBuilder::default()
    }

    /// The timestamp in its canonical textual form.
    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Convert the snapshot to template variables.
    pub fn to_variable_table(&self) -> VariableTable {
        fn opt(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        let mut table = VariableTable::new();
        table.insert(CURRENT_FILE, opt(&self.current_file));
        table.insert(PROJECT_PATH, self.project_path.clone());
        table.insert(PROJECT_STRUCTURE, opt(&self.project_structure));
        table.insert(OS_INFO, self.os_info.clone());
        table.insert(TIMESTAMP, self.timestamp_text());
        table.insert(TOOL_LIST, self.tool_list.clone());
        table.insert(AGENT_RULES, opt(&self.agent_rules));
        table.insert(BUILD_TOOL, self.build_tool.clone());
        table.insert(SHELL, self.shell.clone());
        table.insert(MODULE_INFO, opt(&self.module_info));
        table.insert(FRAMEWORK_CONTEXT, opt(&self.framework_context));
        table
    }
}

/// Fluent builder for [`ContextSnapshot`].
///
/// `project_path` and `timestamp` are mandatory; the remaining text fields
/// default to empty.
#[derive(Debug, Clone, Default)]
pub struct ContextSnapshotBuilder {
    current_file: Option<String>,
    project_path: Option<String>,
    project_structure: Option<String>,
    os_info: String,
    timestamp: Option<DateTime<Utc>>,
    tool_list: String,
    agent_rules: Option<String>,
    build_tool: String,
    shell: String,
    module_info: Option<String>,
    framework_context: Option<String>,
}

impl ContextSnapshotBuilder {
    pub fn current_file(mut self, value: impl Into<String>) -> Self {
        self.current_file = Some(value.into());
        self
    }

    pub fn project_path(mut self, value: impl Into<String>) -> Self {
        self.project_path = Some(value.into());
        self
    }

    pub fn project_structure(mut self, value: impl Into<String>) -> Self {
        self.project_structure = Some(value.into());
        self
    }

    pub fn os_info(mut self, value: impl Into<String>) -> Self {
        self.os_info = value.into();
        self
    }

    pub fn timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.timestamp = Some(value);
        self
    }

    pub fn tool_list(mut self, value: impl Into<String>) -> Self {
        self.tool_list = value.into();
        self
    }

    /// Format the snapshot's tools and use the result as the tool list.
    pub fn tools(self, tools: &ToolSnapshot) -> Result<Self> {
        let text = format_tool_list(tools.list())?;
        Ok(self.tool_list(text))
    }

    pub fn agent_rules(mut self, value: impl Into<String>) -> Self {
        self.agent_rules = Some(value.into());
        self
    }

    pub fn build_tool(mut self, value: impl Into<String>) -> Self {
        self.build_tool = value.into();
        self
    }

    pub fn shell(mut self, value: impl Into<String>) -> Self {
        self.shell = value.into();
        self
    }

    pub fn module_info(mut self, value: impl Into<String>) -> Self {
        self.module_info = Some(value.into());
        self
    }

    pub fn framework_context(mut self, value: impl Into<String>) -> Self {
        self.framework_context = Some(value.into());
        self
    }

    /// Finish the snapshot.
    pub fn build(self) -> Result<ContextSnapshot> {
        let project_path = self
            .project_path
            .ok_or(PromptError::IncompleteContext {
                field: PROJECT_PATH,
            })?;
        let timestamp = self
            .timestamp
            .ok_or(PromptError::IncompleteContext { field: TIMESTAMP })?;

        Ok(ContextSnapshot {
            current_file: self.current_file,
            project_path,
            project_structure: self.project_structure,
            os_info: self.os_info,
            timestamp,
            tool_list: self.tool_list,
            agent_rules: self.agent_rules,
            build_tool: self.build_tool,
            shell: self.shell,
            module_info: self.module_info,
            framework_context: self.framework_context,
        })
    }
}
