//! Tool catalog files.
//!
//! A catalog is a YAML (or JSON) document listing tool descriptors in the
//! order they should be presented:
//!
//! ```yaml
//! tools:
//!   - name: read-file
//!     description: Read file content
//!     parameters:
//!       - name: path
//!         type: string
//!         required: true
//!         description: Path relative to the project root
//!     examples:
//!       - '{"path": "src/main.rs"}'
//! ```
//!
//! Unknown fields are ignored for forward compatibility.

use super::descriptor::ToolDescriptor;
use crate::error::{PromptError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Contents of a tool catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCatalog {
    /// Descriptors in presentation order.
    pub tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Load a catalog from a YAML or JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Io(format!(
                "failed to read tool catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            PromptError::Config(msg) => {
                PromptError::Config(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse a catalog from YAML text. JSON is accepted as well.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::Config(format!("failed to parse tool catalog: {}", e)))
    }

    /// Keep only the enabled tools, in catalog order.
    ///
    /// `None` keeps every tool and an empty list keeps none. A name missing
    /// from the catalog is `NotFound`.
    pub fn select(self, enabled: Option<&[String]>) -> Result<Self> {
        let Some(enabled) = enabled else {
            return Ok(self);
        };

        if let Some(missing) = enabled
            .iter()
            .find(|name| !self.tools.iter().any(|t| &t.name == *name))
        {
            return Err(PromptError::NotFound {
                name: missing.clone(),
            });
        }

        let tools: Vec<_> = self
            .tools
            .into_iter()
            .filter(|t| enabled.contains(&t.name))
            .collect();
        debug!(enabled = tools.len(), "filtered tool catalog");
        Ok(Self { tools })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ToolRegistry;
    use tempfile::TempDir;

    const CATALOG: &str = r#"
tools:
  - name: read-file
    description: Read file content
    parameters:
      - name: path
        type: string
        required: true
        description: Path relative to the project root
      - name: encoding
        type: string
        description: Text encoding
        default: utf-8
  - name: shell
    description: Run a shell command
    parameters:
      - name: command
        type: string
        required: true
        description: Command line
"#;

    #[test]
    fn test_parse_catalog_keeps_order() {
        let catalog = ToolCatalog::from_yaml(CATALOG).unwrap();
        let names: Vec<_> = catalog.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["read-file", "shell"]);
        assert_eq!(
            catalog.tools[0].parameters[1].default.as_deref(),
            Some("utf-8")
        );
    }

    #[test]
    fn test_parse_empty_catalog() {
        let catalog = ToolCatalog::from_yaml("").unwrap();
        assert!(catalog.tools.is_empty());
    }

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{"tools": [{"name": "glob", "description": "Find files"}]}"#;
        let catalog = ToolCatalog::from_yaml(json).unwrap();
        assert_eq!(catalog.tools[0].name, "glob");
        assert!(catalog.tools[0].parameters.is_empty());
    }

    #[test]
    fn test_parse_invalid_catalog() {
        let err = ToolCatalog::from_yaml("tools: [").unwrap_err();
        assert!(matches!(err, PromptError::Config(msg) if msg.contains("tool catalog")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tools.yaml");
        std::fs::write(&path, CATALOG).unwrap();

        let registry = ToolRegistry::from_catalog(ToolCatalog::load(&path).unwrap()).unwrap();
        assert_eq!(registry.names(), vec!["read-file", "shell"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ToolCatalog::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, PromptError::Io(msg) if msg.contains("nope.yaml")));
    }

    #[test]
    fn test_catalog_with_duplicates_fails_registry_construction() {
        let yaml = r#"
tools:
  - name: read-file
  - name: read-file
"#;
        let catalog = ToolCatalog::from_yaml(yaml).unwrap();
        let err = ToolRegistry::from_catalog(catalog).unwrap_err();
        assert!(matches!(err, PromptError::DuplicateTool { .. }));
    }

    #[test]
    fn test_demo_catalog_formats_cleanly() {
        let catalog = ToolCatalog::from_yaml(include_str!("../../demos/tools.yaml")).unwrap();
        let registry = ToolRegistry::from_catalog(catalog).unwrap();
        assert_eq!(
            registry.names(),
            vec!["read-file", "write-file", "grep", "glob", "shell"]
        );

        let text = crate::schema::format_tool_list(registry.list()).unwrap();
        let report = crate::audit::audit_tool_list(&text, registry.list());
        assert!(report.passed(), "{:?}", report.failures());
    }

    fn three_tools() -> ToolCatalog {
        ToolCatalog::from_yaml(
            "tools:\n  - name: read-file\n  - name: write-file\n  - name: grep\n",
        )
        .unwrap()
    }

    fn names(catalog: &ToolCatalog) -> Vec<&str> {
        catalog.tools.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_select_without_filter_keeps_all() {
        let catalog = three_tools().select(None).unwrap();
        assert_eq!(names(&catalog), vec!["read-file", "write-file", "grep"]);
    }

    #[test]
    fn test_select_subset_keeps_catalog_order() {
        let enabled = vec!["grep".to_string(), "read-file".to_string()];
        let catalog = three_tools().select(Some(enabled.as_slice())).unwrap();
        assert_eq!(names(&catalog), vec!["read-file", "grep"]);
    }

    #[test]
    fn test_select_empty_list_keeps_none() {
        let catalog = three_tools().select(Some(&[][..])).unwrap();
        assert!(catalog.tools.is_empty());
    }

    #[test]
    fn test_select_unknown_tool_is_not_found() {
        let enabled = vec!["read-file".to_string(), "shell".to_string()];
        let err = three_tools().select(Some(enabled.as_slice())).unwrap_err();
        assert_eq!(
            err,
            PromptError::NotFound {
                name: "shell".to_string()
            }
        );
    }
}
