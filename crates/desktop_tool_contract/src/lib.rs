//! Shared contract types between the desktop window manager runtime and the tool catalog.
//!
//! The window manager consumes tools through two narrow seams: a [`ToolCatalog`] that answers
//! "what is this tool called and which icon does it use", and a [`ComponentRegistry`] that turns a
//! tool id into a mountable [`ToolModule`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod registry;

use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use registry::{ComponentRegistry, RetryPolicy, ToolLoadFuture, ToolResolveError};

const MAX_TOOL_ID_LEN: usize = 64;

/// Stable identifier for a tool, also used as the window registry key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejection reasons for malformed tool identifiers.
pub enum ToolIdError {
    /// The identifier was empty.
    #[error("tool id must not be empty")]
    Empty,
    /// The identifier exceeded the maximum length.
    #[error("tool id `{0}` is longer than 64 characters")]
    TooLong(String),
    /// The identifier is not lowercase kebab-case.
    #[error("invalid tool id `{0}`; expected lowercase kebab-case")]
    Malformed(String),
}

impl ToolId {
    /// Returns a tool identifier when `raw` is lowercase kebab-case (`ai-code-explainer`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ToolIdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ToolIdError::Empty);
        }
        if raw.len() > MAX_TOOL_ID_LEN {
            return Err(ToolIdError::TooLong(raw));
        }
        if !is_kebab_case(&raw) {
            return Err(ToolIdError::Malformed(raw));
        }
        Ok(Self(raw))
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ToolId {
    type Error = ToolIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ToolId> for String {
    fn from(value: ToolId) -> Self {
        value.0
    }
}

fn is_kebab_case(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') || raw.contains("--") {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Display metadata for one catalog entry.
pub struct ToolDescriptor {
    /// Canonical tool id.
    pub id: ToolId,
    /// Human-readable name shown in window titles, the dock and the taskbar.
    pub display_name: String,
    /// Icon token resolved by the UI layer.
    pub icon: String,
    /// Grouping label used by the dock and the command palette.
    #[serde(default)]
    pub category: String,
    /// One-line summary of what the tool does.
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Error)]
/// Failures while building a [`ToolCatalog`].
pub enum CatalogError {
    /// Catalog JSON could not be decoded.
    #[error("tool catalog decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    /// Two descriptors share the same id.
    #[error("duplicate tool id `{0}` in catalog")]
    DuplicateTool(ToolId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered collection of tool descriptors.
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Builds a catalog, preserving the given order and rejecting duplicate ids.
    pub fn from_descriptors(tools: Vec<ToolDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::BTreeSet::new();
        for tool in &tools {
            if !seen.insert(&tool.id) {
                return Err(CatalogError::DuplicateTool(tool.id.clone()));
            }
        }
        Ok(Self { tools })
    }

    /// Decodes a JSON array of descriptors.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let tools = serde_json::from_str::<Vec<ToolDescriptor>>(raw)?;
        Self::from_descriptors(tools)
    }

    /// Looks up a descriptor by id.
    pub fn get(&self, tool_id: &ToolId) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| &tool.id == tool_id)
    }

    /// Returns whether `tool_id` names a catalog entry.
    pub fn contains(&self, tool_id: &ToolId) -> bool {
        self.get(tool_id).is_some()
    }

    /// Iterates all descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[derive(Debug, Clone)]
/// Runtime-provided inputs handed to a tool when it is mounted into a window.
pub struct ToolMountContext {
    /// Tool being mounted.
    pub tool_id: ToolId,
    /// Catalog metadata when the catalog knows the tool.
    pub descriptor: Option<ToolDescriptor>,
}

/// Static tool mount function used by the component registry.
pub type ToolMountFn = fn(ToolMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable tool module returned by [`ComponentRegistry::resolve`].
pub struct ToolModule {
    mount_fn: ToolMountFn,
}

impl ToolModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: ToolMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the tool view with a runtime-provided context.
    pub fn mount(self, context: ToolMountContext) -> View {
        (self.mount_fn)(context)
    }
}
