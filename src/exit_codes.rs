//! Exit code constants for the toolprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid config/catalog)
//! - 2: Tool failure (duplicate, unknown or malformed tool descriptor)
//! - 3: Template failure (unresolved variable, malformed placeholder)
//! - 4: Audit failure (`check` found a violated invariant)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, invalid config or catalog.
pub const USER_ERROR: i32 = 1;

/// Tool failure: duplicate registration, unknown tool, malformed descriptor.
pub const TOOL_FAILURE: i32 = 2;

/// Template failure: unresolved variable or unterminated placeholder.
pub const TEMPLATE_FAILURE: i32 = 3;

/// Audit failure: rendered output violates one of the format invariants.
pub const AUDIT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            TOOL_FAILURE,
            TEMPLATE_FAILURE,
            AUDIT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(TOOL_FAILURE, 2);
        assert_eq!(TEMPLATE_FAILURE, 3);
        assert_eq!(AUDIT_FAILURE, 4);
    }
}
