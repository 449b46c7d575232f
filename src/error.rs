//! Error types for toolprompt.
//!
//! Uses thiserror for derive macros. Every message names the tool, variable or
//! field that caused the failure so it can be fixed without re-running blindly.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for toolprompt operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A tool with the same name is already registered.
    #[error("tool '{name}' is already registered")]
    DuplicateTool {
        /// Name of the rejected tool.
        name: String,
    },

    /// Lookup of a tool that is not registered.
    #[error("tool '{name}' not found")]
    NotFound {
        /// The requested tool name.
        name: String,
    },

    /// A tool descriptor cannot be rendered into a valid schema block.
    #[error("invalid descriptor for tool '{tool}': {reason}")]
    InvalidDescriptor {
        /// Name of the offending tool (may be empty when the name itself is invalid).
        tool: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A template references a variable the table does not define.
    #[error("unresolved variable '{name}' at position {position} in template")]
    UnresolvedVariable {
        /// The missing variable name.
        name: String,
        /// Byte offset of the placeholder's opening delimiter.
        position: usize,
    },

    /// A placeholder was opened but never closed.
    #[error("unterminated placeholder '{{{{' at position {position} in template")]
    MalformedTemplate {
        /// Byte offset of the unterminated opening delimiter.
        position: usize,
    },

    /// A context snapshot is missing a mandatory field.
    #[error("context snapshot is missing required field '{field}'")]
    IncompleteContext {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Config or catalog could not be parsed or failed validation.
    #[error("{0}")]
    Config(String),

    /// A file could not be read or written.
    #[error("{0}")]
    Io(String),

    /// One or more audit checks failed.
    #[error("{0} audit check(s) failed")]
    AuditFailed(usize),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::DuplicateTool { .. }
            | PromptError::NotFound { .. }
            | PromptError::InvalidDescriptor { .. } => exit_codes::TOOL_FAILURE,
            PromptError::UnresolvedVariable { .. } | PromptError::MalformedTemplate { .. } => {
                exit_codes::TEMPLATE_FAILURE
            }
            PromptError::IncompleteContext { .. }
            | PromptError::Config(_)
            | PromptError::Io(_) => exit_codes::USER_ERROR,
            PromptError::AuditFailed(_) => exit_codes::AUDIT_FAILURE,
        }
    }

    pub(crate) fn invalid(tool: &str, reason: impl Into<String>) -> Self {
        PromptError::InvalidDescriptor {
            tool: tool.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for toolprompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_errors_have_tool_exit_code() {
        let err = PromptError::DuplicateTool {
            name: "read-file".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::TOOL_FAILURE);

        let err = PromptError::NotFound {
            name: "grep".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::TOOL_FAILURE);

        let err = PromptError::invalid("shell", "empty parameter name");
        assert_eq!(err.exit_code(), exit_codes::TOOL_FAILURE);
    }

    #[test]
    fn template_errors_have_template_exit_code() {
        let err = PromptError::UnresolvedVariable {
            name: "tool_list".to_string(),
            position: 7,
        };
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);

        let err = PromptError::MalformedTemplate { position: 0 };
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn ambient_errors_are_user_errors() {
        assert_eq!(
            PromptError::IncompleteContext { field: "timestamp" }.exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            PromptError::Config("bad".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            PromptError::Io("gone".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
    }

    #[test]
    fn error_messages_name_the_culprit() {
        let err = PromptError::DuplicateTool {
            name: "read-file".to_string(),
        };
        assert_eq!(err.to_string(), "tool 'read-file' is already registered");

        let err = PromptError::UnresolvedVariable {
            name: "shell".to_string(),
            position: 12,
        };
        assert_eq!(
            err.to_string(),
            "unresolved variable 'shell' at position 12 in template"
        );

        let err = PromptError::MalformedTemplate { position: 3 };
        assert_eq!(
            err.to_string(),
            "unterminated placeholder '{{' at position 3 in template"
        );

        let err = PromptError::invalid("grep", "unrecognized parameter type 'regex'");
        assert_eq!(
            err.to_string(),
            "invalid descriptor for tool 'grep': unrecognized parameter type 'regex'"
        );
    }

    #[test]
    fn audit_failure_has_audit_exit_code() {
        let err = PromptError::AuditFailed(2);
        assert_eq!(err.exit_code(), exit_codes::AUDIT_FAILURE);
        assert_eq!(err.to_string(), "2 audit check(s) failed");
    }
}
