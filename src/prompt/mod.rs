//! System prompt compilation.
//!
//! A [`ContextSnapshot`] is projected onto a [`VariableTable`], which the
//! template compiler substitutes into either a built-in template or a
//! caller-supplied one.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use toolprompt::prompt::{ContextSnapshot, Locale, render_prompt};
//!
//! let snapshot = ContextSnapshot::builder()
//!     .project_path("/work/app")
//!     .timestamp(Utc::now())
//!     .build()
//!     .unwrap();
//! let prompt = render_prompt(&snapshot, Locale::En).unwrap();
//! assert!(prompt.contains("/work/app"));
//! ```

pub mod context;
mod renderer;
mod template;
mod templates;
mod variables;


pub use context::{ContextSnapshot, ContextSnapshotBuilder, TIMESTAMP_FORMAT, VARIABLE_NAMES};
pub use renderer::{render_prompt, render_with_template};
pub use template::{CLOSE, OPEN, compile, is_variable_name, placeholders};
pub use templates::{Locale, builtin_template};
pub use variables::{Variable, VariableTable, vars};
