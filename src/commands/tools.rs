//! Implementation of the `toolprompt tools` and `toolprompt schema` commands.

use super::{load_config, load_registry, write_output};
use crate::cli::{SchemaArgs, ToolsArgs};
use toolprompt::error::Result;
use toolprompt::schema::{format_tool, format_tool_list};
use toolprompt::tool::ToolRegistry;

fn registry(args: &ToolsArgs) -> Result<ToolRegistry> {
    let config = load_config(args.config.as_deref())?;
    load_registry(args, &config)
}

/// Formatted tool list for the configured catalog.
pub fn tool_list(args: &ToolsArgs) -> Result<String> {
    format_tool_list(registry(args)?.list())
}

/// Formatted block for one tool.
pub fn tool_block(args: &SchemaArgs) -> Result<String> {
    let registry = registry(&args.source)?;
    format_tool(registry.get(&args.name)?)
}

/// Execute the `toolprompt tools` command.
pub fn cmd_tools(args: ToolsArgs) -> Result<()> {
    write_output(std::io::stdout().lock(), &tool_list(&args)?)
}

/// Execute the `toolprompt schema` command.
pub fn cmd_schema(args: SchemaArgs) -> Result<()> {
    write_output(std::io::stdout().lock(), &tool_block(&args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use toolprompt::error::PromptError;

    #[test]
    fn test_tool_list_from_config() {
        let fixture = Fixture::new("tools_file: tools.yaml\n");
        let text = tool_list(&fixture.tools_args()).unwrap();

        assert!(text.starts_with("## read-file\n"));
        assert!(text.contains("\n\n## shell\n"));
        assert!(text.ends_with("{\"command\": \"cargo test\"}\n```"));
    }

    #[test]
    fn test_tool_list_without_catalog_is_empty() {
        let fixture = Fixture::new("");
        assert_eq!(tool_list(&fixture.tools_args()).unwrap(), "");
    }

    #[test]
    fn test_tool_block() {
        let fixture = Fixture::new("tools_file: tools.yaml\n");
        let block = tool_block(&SchemaArgs {
            name: "shell".to_string(),
            source: fixture.tools_args(),
        })
        .unwrap();
        assert!(block.starts_with("## shell\nRun a shell command\n"));
        assert!(!block.contains("read-file"));
    }

    #[test]
    fn test_tool_block_unknown_tool() {
        let fixture = Fixture::new("tools_file: tools.yaml\n");
        let err = tool_block(&SchemaArgs {
            name: "grep".to_string(),
            source: fixture.tools_args(),
        })
        .unwrap_err();
        assert_eq!(
            err,
            PromptError::NotFound {
                name: "grep".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_catalog_is_config_error() {
        let fixture = Fixture::new("tools_file: tools.yaml\n");
        std::fs::write(fixture.path("tools.yaml"), "tools: [unclosed").unwrap();
        let err = tool_list(&fixture.tools_args()).unwrap_err();
        assert!(matches!(err, PromptError::Config(ref msg) if msg.contains("tools.yaml")));
    }
}
