//! Session-scoped tool registry.
//!
//! The registry is an explicitly constructed value, never a global. Storage is
//! an `Arc<Vec<_>>`: [`ToolRegistry::snapshot`] hands out a clone of the `Arc`,
//! and any later [`ToolRegistry::register`] goes through `Arc::make_mut`, which
//! copies the storage while a snapshot is alive. A snapshot therefore never
//! observes a half-updated registry.

use super::catalog::ToolCatalog;
use super::descriptor::ToolDescriptor;
use crate::error::{PromptError, Result};
use std::sync::Arc;
use tracing::debug;

/// Ordered set of tool descriptors keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<Vec<ToolDescriptor>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from descriptors, in iteration order.
    ///
    /// Fails on the first duplicate name.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = ToolDescriptor>,
    {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Build a registry from a loaded catalog.
    pub fn from_catalog(catalog: ToolCatalog) -> Result<Self> {
        Self::from_descriptors(catalog.tools)
    }

    /// Register a tool.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The tool was appended after all existing tools
    /// * `Err(PromptError::DuplicateTool)` - The name is taken; the registry is unchanged
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<()> {
        if self.contains(&descriptor.name) {
            return Err(PromptError::DuplicateTool {
                name: descriptor.name,
            });
        }

        debug!(tool = %descriptor.name, position = self.tools.len(), "registering tool");
        Arc::make_mut(&mut self.tools).push(descriptor);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Result<&ToolDescriptor> {
        find(&self.tools, name)
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }

    /// All tools in registration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Take an immutable view of the current tool set.
    pub fn snapshot(&self) -> ToolSnapshot {
        ToolSnapshot {
            tools: Arc::clone(&self.tools),
        }
    }
}

/// Read-only view of a registry at a point in time.
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ToolSnapshot {
    tools: Arc<Vec<ToolDescriptor>>,
}

impl ToolSnapshot {
    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Result<&ToolDescriptor> {
        find(&self.tools, name)
    }

    /// All tools in registration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Number of tools in the snapshot.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn find<'a>(tools: &'a [ToolDescriptor], name: &str) -> Result<&'a ToolDescriptor> {
    tools
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| PromptError::NotFound {
            name: name.to_string(),
        })
}
