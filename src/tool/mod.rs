//! Tool descriptors and the registry that orders them.
//!
//! - **Descriptor**: closed data record for one capability
//! - **Registry**: ordered, name-unique set with copy-on-write snapshots
//! - **Catalog**: YAML/JSON file format feeding the registry

mod catalog;
mod descriptor;
mod registry;

pub use catalog::ToolCatalog;
pub use descriptor::{ParamSpec, ParamType, Primitive, ToolDescriptor};
pub use registry::{ToolRegistry, ToolSnapshot};
