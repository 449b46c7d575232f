//! Tool descriptor -> prompt text block.
//!
//! Each block has a markdown header, a single-line JSON Schema (draft-07)
//! describing the parameter object, and one example invocation:
//!
//! ````text
//! ## read-file
//! Read file content
//!
//! ```json
//! {"$schema":"http://json-schema.org/draft-07/schema#","title":"read-file",...}
//! ```
//!
//! **Example:**
//! /read-file
//! ```json
//! {"path": "src/main.rs"}
//! ```
//! ````
//!
//! Formatting validates the descriptor first and never returns partial text.

use super::ordered::OrderedObject;
use crate::error::{PromptError, Result};
use crate::tool::{ParamType, Primitive, ToolDescriptor};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Meta-schema every emitted tool schema declares.
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#";

/// Marker line that introduces the example section of a block.
pub const EXAMPLE_HEADING: &str = "**Example:**";

/// Separator between blocks in a tool list: exactly one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Tag-style markup from the retired XML tool format. None of these may
/// appear in formatted output.
pub const LEGACY_MARKUP: &[&str] = &[
    "<tool name=",
    "<tool>",
    "</tool>",
    "<parameters>",
    "</parameters>",
    "<param name=",
    "<param>",
    "</param>",
    "<schema>",
    "</schema>",
    "<example>",
    "</example>",
    "<devin>",
    "</devin>",
];

/// Return the first legacy marker found in `text`, if any.
pub fn find_legacy_markup(text: &str) -> Option<&'static str> {
    LEGACY_MARKUP.iter().copied().find(|m| text.contains(m))
}

#[derive(Serialize)]
struct ObjectSchema<'a> {
    #[serde(rename = "$schema")]
    dialect: &'static str,
    title: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    properties: OrderedObject<'a, PropertySchema<'a>>,
    required: Vec<&'a str>,
    #[serde(rename = "additionalProperties")]
    additional_properties: bool,
}

#[derive(Serialize)]
struct PropertySchema<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<ItemsSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

#[derive(Serialize)]
struct ItemsSchema {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// A parameter whose type and default have been checked.
struct Resolved {
    ty: ParamType,
    default: Option<Value>,
}

/// Render the JSON Schema for a tool's parameter object as compact JSON.
pub fn tool_schema(tool: &ToolDescriptor) -> Result<String> {
    let params = validate(tool)?;
    render_schema(tool, &params)
}

/// Render one tool as a self-contained prompt block.
///
/// # Returns
///
/// * `Ok(String)` - The block, without a trailing newline
/// * `Err(PromptError::InvalidDescriptor)` - Empty name, bad parameter, or legacy markup
pub fn format_tool(tool: &ToolDescriptor) -> Result<String> {
    let params = validate(tool)?;
    let schema = render_schema(tool, &params)?;
    let example = render_example(tool, &params)?;

    let mut block = String::new();
    block.push_str("## ");
    block.push_str(&tool.name);
    block.push('\n');

    let description = tool.description.trim();
    if !description.is_empty() {
        block.push_str(description);
        block.push('\n');
    }

    block.push_str("\n```json\n");
    block.push_str(&schema);
    block.push_str("\n```\n\n");
    block.push_str(EXAMPLE_HEADING);
    block.push_str("\n/");
    block.push_str(&tool.name);
    block.push_str("\n```json\n");
    block.push_str(&example);
    block.push_str("\n```");

    if let Some(marker) = find_legacy_markup(&block) {
        return Err(PromptError::invalid(
            &tool.name,
            format!("output would contain legacy markup '{}'", marker),
        ));
    }

    debug!(tool = %tool.name, bytes = block.len(), "formatted tool block");
    Ok(block)
}

/// Render every tool, in order, separated by one blank line.
///
/// An empty slice yields an empty string. Any invalid descriptor fails the
/// whole list.
pub fn format_tool_list(tools: &[ToolDescriptor]) -> Result<String> {
    let blocks = tools
        .iter()
        .map(format_tool)
        .collect::<Result<Vec<_>>>()?;
    Ok(blocks.join(BLOCK_SEPARATOR))
}

/// Check the descriptor and resolve every parameter type and default.
fn validate(tool: &ToolDescriptor) -> Result<Vec<Resolved>> {
    if tool.name.trim().is_empty() {
        return Err(PromptError::invalid(&tool.name, "tool name must not be empty"));
    }
    if tool.name.chars().any(char::is_whitespace) {
        return Err(PromptError::invalid(
            &tool.name,
            "tool name must not contain whitespace",
        ));
    }

    let mut seen = HashSet::new();
    let mut params = Vec::with_capacity(tool.parameters.len());

    for param in &tool.parameters {
        if param.name.trim().is_empty() {
            return Err(PromptError::invalid(
                &tool.name,
                "parameter name must not be empty",
            ));
        }
        if !seen.insert(param.name.as_str()) {
            return Err(PromptError::invalid(
                &tool.name,
                format!("parameter '{}' is declared more than once", param.name),
            ));
        }
        let param_error = |reason: String| {
            PromptError::invalid(&tool.name, format!("parameter '{}': {}", param.name, reason))
        };
        let ty = param.param_type().map_err(param_error)?;
        let default = param
            .default
            .as_deref()
            .map(|raw| ty.default_value(raw))
            .transpose()
            .map_err(param_error)?;
        params.push(Resolved { ty, default });
    }

    Ok(params)
}

fn render_schema(tool: &ToolDescriptor, params: &[Resolved]) -> Result<String> {
    let mut properties = OrderedObject::with_capacity(tool.parameters.len());
    for (param, resolved) in tool.parameters.iter().zip(params) {
        properties.push(
            param.name.as_str(),
            PropertySchema {
                kind: resolved.ty.schema_name(),
                description: param.description.trim(),
                items: match resolved.ty {
                    ParamType::Array(item) => Some(ItemsSchema {
                        kind: item.as_str(),
                    }),
                    _ => None,
                },
                default: resolved.default.clone(),
            },
        );
    }

    let schema = ObjectSchema {
        dialect: SCHEMA_DIALECT,
        title: &tool.name,
        kind: "object",
        properties,
        required: tool.required_names(),
        additional_properties: false,
    };

    serde_json::to_string(&schema)
        .map_err(|e| PromptError::invalid(&tool.name, format!("schema serialization failed: {}", e)))
}

fn render_example(tool: &ToolDescriptor, params: &[Resolved]) -> Result<String> {
    if let Some(example) = tool
        .examples
        .iter()
        .map(|e| e.trim())
        .find(|e| !e.is_empty())
    {
        return Ok(example.to_string());
    }

    let mut args = OrderedObject::with_capacity(tool.parameters.len());
    for (param, resolved) in tool.parameters.iter().zip(params) {
        if param.required {
            args.push(param.name.as_str(), placeholder_value(resolved));
        }
    }

    serde_json::to_string(&args).map_err(|e| {
        PromptError::invalid(&tool.name, format!("example serialization failed: {}", e))
    })
}

/// The checked default, or a type-appropriate stand-in.
fn placeholder_value(param: &Resolved) -> Value {
    if let Some(default) = &param.default {
        return default.clone();
    }
    match param.ty {
        ParamType::Primitive(Primitive::String) => Value::String("example".to_string()),
        ParamType::Primitive(Primitive::Integer) | ParamType::Primitive(Primitive::Number) => {
            Value::from(0)
        }
        ParamType::Primitive(Primitive::Boolean) => Value::Bool(false),
        ParamType::Object => Value::Object(serde_json::Map::new()),
        ParamType::Array(_) => Value::Array(Vec::new()),
    }
}
