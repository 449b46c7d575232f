//! Implementation of the `toolprompt render` command.

use super::{prepare, write_output};
use crate::cli::{PromptArgs, RenderArgs};
use toolprompt::error::{PromptError, Result};
use toolprompt::prompt::render_with_template;
use tracing::info;

/// Compile the prompt described by `args`.
pub fn render(args: &PromptArgs) -> Result<String> {
    let inputs = prepare(args)?;
    render_with_template(&inputs.snapshot, &inputs.template)
}

/// Execute the `toolprompt render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let prompt = render(&args.prompt)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &prompt).map_err(|e| {
                PromptError::Io(format!(
                    "failed to write prompt to '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            info!(path = %path.display(), bytes = prompt.len(), "wrote prompt");
        }
        None => write_output(std::io::stdout().lock(), &prompt)?,
    }
    Ok(())
}
