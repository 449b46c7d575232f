//! Prompt rendering from a context snapshot.

use super::context::ContextSnapshot;
use super::template::compile;
use super::templates::{Locale, builtin_template};
use crate::error::Result;
use tracing::debug;

/// Render the built-in template for `locale` against `snapshot`.
pub fn render_prompt(snapshot: &ContextSnapshot, locale: Locale) -> Result<String> {
    debug!(%locale, "rendering built-in template");
    render_with_template(snapshot, builtin_template(locale))
}

/// Render a caller-supplied template against `snapshot`.
pub fn render_with_template(snapshot: &ContextSnapshot, template: &str) -> Result<String> {
    compile(template, &snapshot.to_variable_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use chrono::{TimeZone, Utc};

    fn snapshot() -> ContextSnapshot {
        ContextSnapshot::builder()
            .project_path("/test/kotlin-project")
            .os_info("Linux Ubuntu 22.04")
            .timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .tool_list("## read-file\nRead file content")
            .build_tool("gradle")
            .shell("/bin/bash")
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_builtin_en() {
        let prompt = render_prompt(&snapshot(), Locale::En).unwrap();
        assert!(prompt.contains("- Project path: /test/kotlin-project"));
        assert!(prompt.contains("- Time: 2024-01-01T00:00:00Z"));
        assert!(prompt.contains("## read-file\nRead file content"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_render_builtin_zh() {
        let prompt = render_prompt(&snapshot(), Locale::Zh).unwrap();
        assert!(prompt.contains("项目路径: /test/kotlin-project"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_render_custom_template() {
        let prompt = render_with_template(&snapshot(), "{{build_tool}} on {{os_info}}").unwrap();
        assert_eq!(prompt, "gradle on Linux Ubuntu 22.04");
    }

    #[test]
    fn test_render_custom_template_unknown_variable() {
        let err = render_with_template(&snapshot(), "{{task}}").unwrap_err();
        assert!(matches!(err, PromptError::UnresolvedVariable { ref name, .. } if name == "task"));
    }
}
