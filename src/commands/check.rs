//! Implementation of the `toolprompt check` command.
//!
//! Renders the prompt and audits both the tool list and the compiled text.

use super::{PromptInputs, prepare};
use crate::cli::PromptArgs;
use toolprompt::audit::{AuditReport, CheckResult, audit_prompt, audit_tool_list};
use toolprompt::error::{PromptError, Result};
use toolprompt::prompt::{VARIABLE_NAMES, placeholders, render_with_template};

/// Run every audit over the inputs described by `args`.
///
/// Template problems are reported as failed checks instead of errors so the
/// whole report is still printed.
pub fn audit(args: &PromptArgs) -> Result<AuditReport> {
    let PromptInputs {
        registry,
        snapshot,
        template,
    } = prepare(args)?;

    let tool_report = audit_tool_list(&snapshot.tool_list, registry.list());

    let variables = match placeholders(&template) {
        Ok(names) => {
            let unknown: Vec<String> = names
                .into_iter()
                .filter(|n| !VARIABLE_NAMES.contains(&n.as_str()))
                .collect();
            if unknown.is_empty() {
                CheckResult::pass("template variables")
            } else {
                CheckResult::fail(
                    "template variables",
                    format!("unknown variable(s): {}", unknown.join(", ")),
                )
            }
        }
        Err(e) => CheckResult::fail("template variables", e.to_string()),
    };

    let prompt_report = if variables.is_success() {
        let output = render_with_template(&snapshot, &template)?;
        audit_prompt(&template, &snapshot.to_variable_table(), &output)
    } else {
        AuditReport::default()
    };

    Ok(tool_report
        .merge(AuditReport {
            checks: vec![variables],
        })
        .merge(prompt_report))
}

/// Human-readable check list.
pub fn format_report(report: &AuditReport) -> String {
    let mut out = String::new();
    for check in &report.checks {
        let mark = if check.is_success() { "✅" } else { "❌" };
        out.push_str(&format!("  {} {}", mark, check.name));
        if let Some(message) = &check.message {
            out.push_str(&format!(": {}", message));
        }
        out.push('\n');
    }
    out
}

/// Execute the `toolprompt check` command.
pub fn cmd_check(args: PromptArgs) -> Result<()> {
    let report = audit(&args)?;

    println!("Prompt Audit");
    println!("============");
    print!("{}", format_report(&report));

    let failures = report.failures().len();
    if failures > 0 {
        return Err(PromptError::AuditFailed(failures));
    }
    println!();
    println!("All {} checks passed.", report.checks.len());
    Ok(())
}
