//! CLI argument parsing for toolprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use toolprompt::prompt::Locale;

/// toolprompt: render the system prompt for a coding agent.
///
/// The prompt is assembled from:
/// - a tool catalog, formatted as JSON Schema blocks
/// - environment facts (project path, OS, build tool, shell, time)
/// - a built-in or custom `{{variable}}` template
#[derive(Parser, Debug)]
#[command(name = "toolprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for toolprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile the system prompt.
    ///
    /// Writes the prompt to stdout, or to `--output` when given.
    Render(RenderArgs),

    /// Print the formatted tool list.
    Tools(ToolsArgs),

    /// Print the schema block of a single tool.
    Schema(SchemaArgs),

    /// Render the prompt and audit it.
    ///
    /// Verifies tool order, schema validity, required fields, examples,
    /// and the absence of leftover placeholders or legacy markup.
    Check(PromptArgs),
}

/// Where the tool catalog comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct ToolsArgs {
    /// Config file (default: ./toolprompt.yaml when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tool catalog file; overrides `tools_file` from the config.
    #[arg(short, long)]
    pub tools: Option<PathBuf>,
}

/// Inputs for compiling a prompt.
#[derive(Args, Debug, Clone, Default)]
pub struct PromptArgs {
    #[command(flatten)]
    pub source: ToolsArgs,

    /// Custom template file; overrides `template_file` from the config.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Built-in template language (en, zh).
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Project root (default: current directory).
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// File currently open in the editor.
    #[arg(long)]
    pub current_file: Option<String>,
}

/// Arguments for the `render` command.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub prompt: PromptArgs,

    /// Write the prompt to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `schema` command.
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Tool name.
    pub name: String,

    #[command(flatten)]
    pub source: ToolsArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
