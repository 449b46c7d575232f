//! Tool descriptor data model.
//!
//! A descriptor is a closed data record: it carries what the schema formatter
//! needs and nothing about how the tool executes. Parameter types are kept as
//! their textual names so catalogs can be loaded without a schema of their
//! own; [`ParamType::parse`] resolves them when a block is formatted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive types allowed as array item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Integer,
    Number,
    Boolean,
}

impl Primitive {
    /// Parse a primitive type name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// JSON Schema name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Whether `value` is an instance of this type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// Resolved parameter type.
///
/// The model is flat on purpose: primitives, untyped objects, and arrays of
/// primitives. Nested object shapes are not expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Primitive(Primitive),
    Object,
    Array(Primitive),
}

impl ParamType {
    /// Resolve a type name plus optional array item type.
    ///
    /// Returns `Err` with a human-readable reason when the combination is not
    /// part of the supported model.
    pub fn parse(kind: &str, items: Option<&str>) -> Result<Self, String> {
        let resolved = match kind {
            "object" => ParamType::Object,
            "array" => {
                let item = match items {
                    None => Primitive::String,
                    Some(name) => Primitive::parse(name).ok_or_else(|| {
                        format!("array items must be a primitive type, found '{}'", name)
                    })?,
                };
                return Ok(ParamType::Array(item));
            }
            other => match Primitive::parse(other) {
                Some(p) => ParamType::Primitive(p),
                None => return Err(format!("unrecognized parameter type '{}'", other)),
            },
        };

        if let Some(name) = items {
            return Err(format!(
                "'items' ('{}') is only allowed on array parameters, not '{}'",
                name, kind
            ));
        }
        Ok(resolved)
    }

    /// JSON Schema `type` keyword for this parameter.
    pub fn schema_name(self) -> &'static str {
        match self {
            ParamType::Primitive(p) => p.as_str(),
            ParamType::Object => "object",
            ParamType::Array(_) => "array",
        }
    }

    /// Convert a textual default into a JSON value of this type.
    ///
    /// `string` keeps the text verbatim. Every other type must parse as JSON
    /// of the matching kind.
    pub fn default_value(self, raw: &str) -> Result<Value, String> {
        if self == ParamType::Primitive(Primitive::String) {
            return Ok(Value::String(raw.to_string()));
        }

        let mismatch = || format!("default '{}' is not a valid {}", raw, self.describe());
        let value: Value = serde_json::from_str(raw.trim()).map_err(|_| mismatch())?;
        let matches = match self {
            ParamType::Primitive(p) => p.accepts(&value),
            ParamType::Object => value.is_object(),
            ParamType::Array(item) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|v| item.accepts(v))),
        };
        if matches { Ok(value) } else { Err(mismatch()) }
    }

    fn describe(self) -> String {
        match self {
            ParamType::Array(item) => format!("array of {}", item.as_str()),
            other => other.schema_name().to_string(),
        }
    }
}

/// Specification of a single tool parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name (JSON property key).
    pub name: String,

    /// Type name: `string`, `integer`, `number`, `boolean`, `object` or `array`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Whether callers must supply this parameter.
    #[serde(default)]
    pub required: bool,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Default value as text. Kept verbatim for `string` parameters; other
    /// types must parse as JSON of the declared kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Item type name for `array` parameters (defaults to `string`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
}

impl ParamSpec {
    fn new(name: &str, kind: &str, required: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            required,
            description: description.to_string(),
            default: None,
            items: None,
        }
    }

    /// A required parameter.
    pub fn required(name: &str, kind: &str, description: &str) -> Self {
        Self::new(name, kind, true, description)
    }

    /// An optional parameter.
    pub fn optional(name: &str, kind: &str, description: &str) -> Self {
        Self::new(name, kind, false, description)
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the array item type.
    pub fn with_items(mut self, items: impl Into<String>) -> Self {
        self.items = Some(items.into());
        self
    }

    /// Resolve the declared type.
    pub fn param_type(&self) -> Result<ParamType, String> {
        ParamType::parse(&self.kind, self.items.as_deref())
    }
}

/// Static description of one capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique identifier; lookup key and schema title.
    pub name: String,

    /// Human-readable summary.
    #[serde(default)]
    pub description: String,

    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParamSpec>,

    /// Example invocations (argument objects as text).
    #[serde(default)]
    pub examples: Vec<String>,
}

impl ToolDescriptor {
    /// Create a descriptor with no parameters or examples.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Append a parameter.
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Append an example invocation.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Names of required parameters, in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }
}
