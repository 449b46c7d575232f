//! Schema formatting for tool descriptors.
//!
//! Turns each [`ToolDescriptor`](crate::tool::ToolDescriptor) into a markdown
//! block carrying a draft-07 JSON Schema and an example call, and joins the
//! blocks of a registry into the tool-list text injected into prompts.

mod formatter;
mod ordered;


pub use formatter::{
    BLOCK_SEPARATOR, EXAMPLE_HEADING, LEGACY_MARKUP, SCHEMA_DIALECT, find_legacy_markup,
    format_tool, format_tool_list, tool_schema,
};
