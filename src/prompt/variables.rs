//! Ordered variable table consumed by the template compiler.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// A renderable variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    /// Text inserted verbatim.
    Text(String),
    /// A list rendered as a comma-separated string.
    List(Vec<String>),
    /// A structured value rendered as compact JSON.
    Structured(Value),
}

impl Variable {
    /// Canonical text form of the value.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Variable::Text(text) => Cow::Borrowed(text),
            Variable::List(items) => Cow::Owned(items.join(", ")),
            Variable::Structured(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Variable::Text(value)
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Variable::Text(value.to_string())
    }
}

impl From<Vec<String>> for Variable {
    fn from(value: Vec<String>) -> Self {
        Variable::List(value)
    }
}

impl From<Value> for Variable {
    fn from(value: Value) -> Self {
        Variable::Structured(value)
    }
}

/// Mapping from variable name to value that remembers insertion order.
///
/// Inserting a name that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    entries: Vec<(String, Variable)>,
}

impl VariableTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Variable>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Whether a variable is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableTable
where
    K: Into<String>,
    V: Into<Variable>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = VariableTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

/// Helper to create a table from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> VariableTable
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Variable>,
{
    pairs.into_iter().collect()
}
