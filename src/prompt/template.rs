//! Template compiler for `{{variable}}` substitution.
//!
//! # Syntax
//!
//! - `{{name}}` - Substitutes the value of variable `name`; whitespace inside
//!   the delimiters is trimmed, so `{{ name }}` works too
//! - A name matches `[A-Za-z_][A-Za-z0-9_.-]*`
//! - Anything else is literal text, including lone `{`/`}`, a stray `}}`, and
//!   `{{...}}` whose content is not a valid name (e.g. `{{}}`)
//! - A `{{` inside an open placeholder restarts it: the earlier `{{` and the
//!   text after it are literal
//!
//! # Semantics
//!
//! Compilation is a single left-to-right pass. Substituted values are copied
//! verbatim and never re-scanned, so a value containing `{{x}}` stays as is.
//! A missing variable or an unterminated `{{` fails the whole compilation;
//! no partial output is ever returned.

use super::variables::VariableTable;
use crate::error::{PromptError, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Opening placeholder delimiter.
pub const OPEN: &str = "{{";

/// Closing placeholder delimiter.
pub const CLOSE: &str = "}}";

static VARIABLE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("Invalid variable name regex")
});

/// Whether `name` is a syntactically valid variable name.
pub fn is_variable_name(name: &str) -> bool {
    VARIABLE_NAME_REGEX.is_match(name)
}

/// A piece of scanned template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder { name: &'a str, position: usize },
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// Copying literal text that began at `start`.
    Literal { start: usize },
    /// Inside `{{` opened at `open`; literal text runs from `literal_start` to `open`.
    InPlaceholder { literal_start: usize, open: usize },
}

/// Split a template into literal text and placeholders.
fn scan(template: &str) -> Result<Vec<Segment<'_>>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut state = ScanState::Literal { start: 0 };
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];
        match state {
            ScanState::Literal { start } => {
                if rest.starts_with(OPEN.as_bytes()) {
                    state = ScanState::InPlaceholder {
                        literal_start: start,
                        open: i,
                    };
                    i += OPEN.len();
                    continue;
                }
            }
            ScanState::InPlaceholder { literal_start, open } => {
                if rest.starts_with(OPEN.as_bytes()) {
                    // No nesting: the previous opener was literal text.
                    state = ScanState::InPlaceholder {
                        literal_start,
                        open: i,
                    };
                    i += OPEN.len();
                    continue;
                }
                if rest.starts_with(CLOSE.as_bytes()) {
                    let end = i + CLOSE.len();
                    let name = template[open + OPEN.len()..i].trim();

                    if is_variable_name(name) {
                        if literal_start < open {
                            segments.push(Segment::Text(&template[literal_start..open]));
                        }
                        segments.push(Segment::Placeholder {
                            name,
                            position: open,
                        });
                        state = ScanState::Literal { start: end };
                    } else {
                        // Not a placeholder; keep the whole run as literal text.
                        state = ScanState::Literal {
                            start: literal_start,
                        };
                    }
                    i = end;
                    continue;
                }
            }
        }
        i += 1;
    }

    match state {
        ScanState::Literal { start } => {
            if start < template.len() {
                segments.push(Segment::Text(&template[start..]));
            }
            Ok(segments)
        }
        ScanState::InPlaceholder { open, .. } => {
            Err(PromptError::MalformedTemplate { position: open })
        }
    }
}

/// Compile a template by substituting every placeholder from `table`.
///
/// # Returns
///
/// * `Ok(String)` - The template with all placeholders replaced
/// * `Err(PromptError::UnresolvedVariable)` - A placeholder names a variable missing from `table`
/// * `Err(PromptError::MalformedTemplate)` - A `{{` is never closed
///
/// # Examples
///
/// ```
/// use toolprompt::prompt::{compile, vars};
///
/// let table = vars([("tool_list", "## read-file")]);
/// let result = compile("Tools:\n{{tool_list}}", &table).unwrap();
/// assert_eq!(result, "Tools:\n## read-file");
/// ```
pub fn compile(template: &str, table: &VariableTable) -> Result<String> {
    let segments = scan(template)?;
    let mut output = String::with_capacity(template.len());

    for segment in segments {
        match segment {
            Segment::Text(text) => output.push_str(text),
            Segment::Placeholder { name, position } => match table.get(name) {
                Some(value) => output.push_str(&value.render()),
                None => {
                    return Err(PromptError::UnresolvedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    debug!(
        template_bytes = template.len(),
        output_bytes = output.len(),
        "compiled template"
    );
    Ok(output)
}

/// Distinct variable names referenced by a template, in first-occurrence order.
pub fn placeholders(template: &str) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for segment in scan(template)? {
        if let Segment::Placeholder { name, .. } = segment {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}
