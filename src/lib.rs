//! toolprompt: deterministic tool-schema formatting and system-prompt
//! compilation for coding agents.
//!
//! The pipeline has two halves:
//! - [`tool`] + [`schema`]: an ordered registry of tool descriptors, each
//!   rendered as a markdown block carrying a draft-07 JSON Schema
//! - [`prompt`]: a context snapshot projected onto a variable table and
//!   substituted into a `{{variable}}` template
//!
//! Identical inputs always produce byte-identical output.

pub mod audit;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod prompt;
pub mod schema;
pub mod tool;
