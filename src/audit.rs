//! Audits over formatted tool lists and compiled prompts.
//!
//! The checks re-read the emitted text rather than trusting the formatter,
//! so they also catch hand-edited templates and tool lists pasted in from
//! elsewhere.

use crate::prompt::{VariableTable, placeholders};
use crate::schema::{EXAMPLE_HEADING, SCHEMA_DIALECT, find_legacy_markup};
use crate::tool::ToolDescriptor;
use serde_json::Value;
use tracing::warn;

/// Status of one audit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// Result of a single audit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: Option<String>,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            message: None,
        }
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            message: Some(message.into()),
        }
    }

    fn from_problems(name: &str, problems: Vec<String>) -> Self {
        if problems.is_empty() {
            Self::pass(name)
        } else {
            Self::fail(name, problems.join("; "))
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Ordered list of check results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub checks: Vec<CheckResult>,
}

impl AuditReport {
    fn new(checks: Vec<CheckResult>) -> Self {
        for check in checks.iter().filter(|c| !c.is_success()) {
            warn!(
                check = %check.name,
                message = check.message.as_deref().unwrap_or(""),
                "audit check failed"
            );
        }
        Self { checks }
    }

    /// True when every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckResult::is_success)
    }

    pub fn failures(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.is_success()).collect()
    }

    /// Append the checks of another report.
    pub fn merge(mut self, other: AuditReport) -> Self {
        self.checks.extend(other.checks);
        self
    }
}

/// Audit a formatted tool list against the descriptors it was built from.
pub fn audit_tool_list(text: &str, tools: &[ToolDescriptor]) -> AuditReport {
    let blocks = split_blocks(text, tools);

    let order = match &blocks {
        Some(_) if tools.is_empty() && !text.trim().is_empty() => {
            CheckResult::fail("tool order", "expected an empty tool list")
        }
        Some(_) => CheckResult::pass("tool order"),
        None => CheckResult::fail(
            "tool order",
            "tool headers are missing or out of registration order",
        ),
    };

    let mut checks = vec![order];
    let Some(blocks) = blocks else {
        checks.push(legacy_check(text));
        return AuditReport::new(checks);
    };

    let mut schema_problems = Vec::new();
    let mut required_problems = Vec::new();
    let mut closed_problems = Vec::new();
    let mut example_problems = Vec::new();

    for (tool, block) in tools.iter().zip(&blocks) {
        match parse_schema(block) {
            Ok(schema) => {
                if schema["$schema"] != SCHEMA_DIALECT {
                    schema_problems.push(format!("{}: wrong $schema", tool.name));
                }
                let required: Option<Vec<&str>> = schema["required"]
                    .as_array()
                    .map(|items| items.iter().filter_map(Value::as_str).collect());
                if required.as_deref() != Some(tool.required_names().as_slice()) {
                    required_problems.push(format!(
                        "{}: expected {:?}, found {}",
                        tool.name,
                        tool.required_names(),
                        schema["required"]
                    ));
                }
                if schema["additionalProperties"] != Value::Bool(false) {
                    closed_problems.push(tool.name.clone());
                }
            }
            Err(reason) => schema_problems.push(format!("{}: {}", tool.name, reason)),
        }

        let call = format!("{}\n/{}\n```json\n", EXAMPLE_HEADING, tool.name);
        if !block.contains(&call) {
            example_problems.push(tool.name.clone());
        }
    }

    checks.push(CheckResult::from_problems("schema validity", schema_problems));
    checks.push(CheckResult::from_problems("required fields", required_problems));
    checks.push(CheckResult::from_problems(
        "closed parameter objects",
        closed_problems
            .into_iter()
            .map(|n| format!("{}: additionalProperties is not false", n))
            .collect(),
    ));
    checks.push(CheckResult::from_problems(
        "examples",
        example_problems
            .into_iter()
            .map(|n| format!("{}: no example call", n))
            .collect(),
    ));
    checks.push(legacy_check(text));

    AuditReport::new(checks)
}

/// Audit a compiled prompt against the template and table it came from.
///
/// Leak-through is judged on the template side: every placeholder the
/// template names must resolve in `table`. Substituted values may carry
/// their own `{{...}}` text and are never rescanned. Legacy markup is
/// searched in the compiled `output`.
pub fn audit_prompt(template: &str, table: &VariableTable, output: &str) -> AuditReport {
    let leak = match placeholders(template) {
        Ok(names) => {
            let missing: Vec<String> = names
                .into_iter()
                .filter(|name| !table.contains(name))
                .map(|name| format!("'{{{{{}}}}}'", name))
                .collect();
            if missing.is_empty() {
                CheckResult::pass("no unresolved placeholders")
            } else {
                CheckResult::fail("no unresolved placeholders", missing.join(", "))
            }
        }
        Err(e) => CheckResult::fail("no unresolved placeholders", e.to_string()),
    };
    AuditReport::new(vec![leak, legacy_check(output)])
}

fn legacy_check(text: &str) -> CheckResult {
    match find_legacy_markup(text) {
        Some(marker) => CheckResult::fail("no legacy markup", format!("found '{}'", marker)),
        None => CheckResult::pass("no legacy markup"),
    }
}

/// Slice `text` into one block per tool, locating each `## name` header
/// after the previous one. `None` when a header is missing or out of order.
fn split_blocks<'a>(text: &'a str, tools: &[ToolDescriptor]) -> Option<Vec<&'a str>> {
    let mut starts = Vec::with_capacity(tools.len());
    let mut cursor = 0;

    for tool in tools {
        let header = format!("## {}\n", tool.name);
        let found = text[cursor..]
            .match_indices(&header)
            .map(|(i, _)| i + cursor)
            .find(|&i| i == 0 || text[..i].ends_with('\n'))?;
        starts.push(found);
        cursor = found + header.len();
    }

    let blocks = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect();
    Some(blocks)
}

/// Parse the schema line that follows a block's first json fence.
fn parse_schema(block: &str) -> Result<Value, String> {
    let mut lines = block.lines();
    if !lines.any(|l| l == "```json") {
        return Err("no schema fence".to_string());
    }
    let line = lines.next().ok_or_else(|| "empty schema fence".to_string())?;
    serde_json::from_str(line).map_err(|e| format!("schema is not valid JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{compile, vars};
    use crate::schema::format_tool_list;
    use crate::tool::ParamSpec;

    fn tools() -> Vec<ToolDescriptor> {
        vec![
            ToolDescriptor::new("read-file", "Read file content")
                .param(ParamSpec::required("path", "string", "File"))
                .param(ParamSpec::optional("encoding", "string", "Encoding")),
            ToolDescriptor::new("read-file-range", "Read part of a file")
                .param(ParamSpec::required("path", "string", "File"))
                .param(ParamSpec::required("start", "integer", "First line")),
        ]
    }

    #[test]
    fn test_formatted_list_passes() {
        let tools = tools();
        let text = format_tool_list(&tools).unwrap();
        let report = audit_tool_list(&text, &tools);
        assert!(report.passed(), "{:?}", report.failures());
        assert_eq!(report.checks.len(), 6);
    }

    #[test]
    fn test_empty_list_passes() {
        let report = audit_tool_list("", &[]);
        assert!(report.passed());
    }

    #[test]
    fn test_text_without_tools_fails_order() {
        let report = audit_tool_list("## stray\n", &[]);
        assert!(!report.passed());
        assert_eq!(report.failures()[0].name, "tool order");
    }

    #[test]
    fn test_swapped_order_fails() {
        let tools = tools();
        let reversed: Vec<_> = tools.iter().rev().cloned().collect();
        let text = format_tool_list(&reversed).unwrap();

        let report = audit_tool_list(&text, &tools);
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, "tool order");
    }

    #[test]
    fn test_tampered_required_fails() {
        let tools = tools();
        let text = format_tool_list(&tools)
            .unwrap()
            .replace(r#""required":["path","start"]"#, r#""required":["path"]"#);

        let report = audit_tool_list(&text, &tools);
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, "required fields");
        assert!(failures[0].message.as_deref().unwrap().contains("read-file-range"));
    }

    #[test]
    fn test_open_schema_and_missing_example_fail() {
        let tools = tools();
        let text = format_tool_list(&tools)
            .unwrap()
            .replace(r#""additionalProperties":false"#, r#""additionalProperties":true"#)
            .replace("**Example:**", "Example");

        let report = audit_tool_list(&text, &tools);
        let names: Vec<_> = report.failures().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["closed parameter objects", "examples"]);
    }

    #[test]
    fn test_broken_schema_json_fails() {
        let tools = tools();
        let text = format_tool_list(&tools[..1])
            .unwrap()
            .replace(r#""type":"object","#, r#""type":"object""#);

        let report = audit_tool_list(&text, &tools[..1]);
        assert_eq!(report.failures()[0].name, "schema validity");
    }

    #[test]
    fn test_prompt_leak_detected() {
        let template = "Tools:\n{{ tool_list }}\n{{os_info}}";
        let table = vars([("os_info", "Linux")]);
        let report = audit_prompt(template, &table, "Tools:\n\nLinux");
        assert!(!report.passed());
        let message = report.failures()[0].message.clone().unwrap();
        assert_eq!(message, "'{{tool_list}}'");
    }

    #[test]
    fn test_prompt_literal_braces_are_not_leaks() {
        let template = r#"{"path": "src/main.ts"} and {{}} and {{"a":1}}"#;
        let report = audit_prompt(template, &VariableTable::new(), template);
        assert!(report.passed());
    }

    #[test]
    fn test_substituted_placeholder_text_is_not_a_leak() {
        let tools = vec![ToolDescriptor::new("render", "Renders {{name}} placeholders")];
        let tool_list = format_tool_list(&tools).unwrap();
        let table = vars([("tool_list", tool_list.as_str())]);
        let template = "Tools:\n{{tool_list}}";
        let output = compile(template, &table).unwrap();

        assert!(output.contains("Renders {{name}} placeholders"));
        let report = audit_prompt(template, &table, &output);
        assert!(report.passed(), "{:?}", report.failures());
    }

    #[test]
    fn test_malformed_template_fails_leak_check() {
        let report = audit_prompt("{{tool_list", &VariableTable::new(), "");
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, "no unresolved placeholders");
    }

    #[test]
    fn test_prompt_legacy_markup_detected() {
        let output = "<devin>\n/read-file\n</devin>";
        let report = audit_prompt(output, &VariableTable::new(), output);
        assert_eq!(report.failures()[0].name, "no legacy markup");
    }

    #[test]
    fn test_merge_keeps_order() {
        let report = audit_tool_list("", &[]).merge(audit_prompt("ok", &VariableTable::new(), "ok"));
        assert_eq!(report.checks.len(), 8);
        assert!(report.passed());
    }
}
