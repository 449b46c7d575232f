//! Command implementations for toolprompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input loading shared by all of them.

mod check;
mod environment;
mod render;
mod tools;

use crate::cli::{Command, PromptArgs, ToolsArgs};
use chrono::Utc;
use std::io::Write;
use std::path::{Path, PathBuf};
use toolprompt::config::Config;
use toolprompt::error::{PromptError, Result};
use toolprompt::prompt::{ContextSnapshot, Locale, builtin_template};
use toolprompt::tool::{ToolCatalog, ToolRegistry};
use tracing::{debug, warn};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Tools(args) => tools::cmd_tools(args),
        Command::Schema(args) => tools::cmd_schema(args),
        Command::Check(args) => check::cmd_check(args),
    }
}

/// Everything needed to compile one prompt.
#[derive(Debug)]
pub(crate) struct PromptInputs {
    pub registry: ToolRegistry,
    pub snapshot: ContextSnapshot,
    pub template: String,
}

/// Load the explicit config, or `./toolprompt.yaml` when present.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_optional("."),
    }
}

/// Build the registry from the catalog named by the flag or the config,
/// keeping only `enabled_tools` when the config lists them.
///
/// Without any catalog the registry is empty and the prompt has no tools.
pub(crate) fn load_registry(args: &ToolsArgs, config: &Config) -> Result<ToolRegistry> {
    let path = args.tools.as_ref().or(config.tools_file.as_ref());
    match path {
        Some(path) => {
            let catalog =
                ToolCatalog::load(path)?.select(config.enabled_tools.as_deref())?;
            let registry = ToolRegistry::from_catalog(catalog)?;
            debug!(path = %path.display(), tools = registry.len(), "loaded tool catalog");
            Ok(registry)
        }
        None => {
            warn!("no tool catalog configured; the tool list will be empty");
            Ok(ToolRegistry::new())
        }
    }
}

fn read_text(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        PromptError::Io(format!(
            "failed to read {} '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}

/// Write command output exactly as produced, with no trailing newline added.
pub(crate) fn write_output(mut out: impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| PromptError::Io(format!("failed to write output: {}", e)))
}

fn project_root(explicit: Option<&PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.clone()),
        None => std::env::current_dir().map_err(|e| {
            PromptError::Io(format!("failed to determine current directory: {}", e))
        }),
    }
}

/// Gather config, tools, environment facts and template for a prompt.
pub(crate) fn prepare(args: &PromptArgs) -> Result<PromptInputs> {
    let config = load_config(args.source.config.as_deref())?;
    let registry = load_registry(&args.source, &config)?;
    let project = project_root(args.project.as_ref())?;

    let mut builder = ContextSnapshot::builder()
        .project_path(project.display().to_string())
        .os_info(
            config
                .os_info
                .clone()
                .unwrap_or_else(environment::os_info),
        )
        .shell(environment::shell(
            config.shell.as_deref(),
            std::env::var("SHELL").ok(),
        ))
        .build_tool(
            config
                .build_tool
                .clone()
                .or_else(|| environment::detect_build_tool(&project).map(str::to_string))
                .unwrap_or_else(|| environment::UNKNOWN_BUILD_TOOL.to_string()),
        )
        .timestamp(Utc::now())
        .tools(&registry.snapshot())?;

    if let Some(file) = &args.current_file {
        builder = builder.current_file(file.clone());
    }
    if let Some(rules) = &config.agent_rules_file {
        builder = builder.agent_rules(read_text(rules, "agent rules file")?);
    }
    if let Some(text) = &config.project_structure {
        builder = builder.project_structure(text.clone());
    }
    if let Some(text) = &config.module_info {
        builder = builder.module_info(text.clone());
    }
    if let Some(text) = &config.framework_context {
        builder = builder.framework_context(text.clone());
    }
    let snapshot = builder.build()?;

    let template = match args.template.as_ref().or(config.template_file.as_ref()) {
        Some(path) => read_text(path, "template file")?,
        None => {
            let locale: Locale = args.locale.unwrap_or(config.locale);
            builtin_template(locale).to_string()
        }
    };

    Ok(PromptInputs {
        registry,
        snapshot,
        template,
    })
}
